//! Stylesheet inlined into every generated page.

pub const BASE_CSS: &str = r#"*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#0a0a0a;--card:#1a1a1a;--text:#fff;--text-dim:#a0a0a0;--accent:#00ff88;--border:#2a2a2a}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:var(--bg);color:var(--text);line-height:1.6}
nav{position:fixed;top:0;width:100%;background:rgba(10,10,10,.85);backdrop-filter:blur(20px);border-bottom:1px solid var(--border);z-index:1000;padding:1.5rem 2rem}
.nav-content{max-width:1400px;margin:0 auto;display:flex;justify-content:space-between;align-items:center}
.logo{font-size:1.5rem;font-weight:700;color:var(--accent);text-decoration:none}
.nav-links{display:flex;gap:2rem;list-style:none}
.nav-links a{color:var(--text-dim);text-decoration:none;font-weight:500}
.nav-links a:hover{color:var(--accent)}
.container{max-width:1400px;margin:0 auto;padding:0 2rem}
.hero{min-height:100vh;display:flex;align-items:center;padding-top:80px}
.hero-content{max-width:900px}
.hero-tag{display:inline-block;padding:.5rem 1rem;border:1px solid var(--accent);border-radius:50px;color:var(--accent);font-size:.9rem;margin-bottom:2rem}
h1{font-size:clamp(3rem,8vw,6rem);font-weight:800;line-height:1.1;margin-bottom:1.5rem}
.hero-description{font-size:1.3rem;color:var(--text-dim);margin-bottom:3rem}
.cta-buttons{display:flex;gap:1rem;flex-wrap:wrap}
.btn{padding:1rem 2rem;border-radius:12px;text-decoration:none;font-weight:600;display:inline-flex;gap:.5rem}
.btn-primary{background:var(--accent);color:var(--bg)}
.btn-secondary{color:var(--text);border:2px solid var(--border)}
section{padding:8rem 0}
.section-header{text-align:center;margin-bottom:5rem}
.section-tag{color:var(--accent);font-weight:600;font-size:.9rem;letter-spacing:2px;text-transform:uppercase;margin-bottom:1rem}
h2{font-size:clamp(2.5rem,5vw,4rem);font-weight:800;margin-bottom:1rem}
.expertise-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:2rem}
.expertise-card,.blog-card{background:var(--card);border:1px solid var(--border);border-radius:20px;padding:2.5rem}
.expertise-icon{font-size:3rem;margin-bottom:1.5rem}
.skills-container{display:flex;flex-wrap:wrap;gap:1rem;justify-content:center}
.skill-tag{padding:.8rem 1.5rem;background:var(--card);border:1px solid var(--border);border-radius:50px}
.blog-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(350px,1fr));gap:2rem}
.blog-card{display:block;padding:0;overflow:hidden;color:inherit;text-decoration:none}
.blog-image{font-size:4rem;text-align:center;padding-top:2rem}
.blog-content{display:flex;flex-direction:column;padding:2rem}
.featured-post{max-width:800px;margin:0 auto}
.blog-meta,.article-meta{display:flex;gap:1rem;font-size:.85rem;color:var(--text-dim);margin-bottom:1rem}
.blog-tag-small,.article-category{color:var(--accent);font-weight:600}
.blog-excerpt{color:var(--text-dim);margin-bottom:1.5rem}
.read-more{color:var(--accent);font-weight:600}
.contact-links{display:flex;gap:1.5rem;justify-content:center;flex-wrap:wrap}
.contact-link{padding:1.2rem 2rem;background:var(--card);border:1px solid var(--border);border-radius:15px;color:var(--text);text-decoration:none}
footer{border-top:1px solid var(--border);padding:3rem 0;text-align:center;color:var(--text-dim)}
.terminal{font-family:'Courier New',monospace;color:var(--accent);margin-bottom:1rem}
.article{padding:10rem 0 5rem;max-width:800px;margin:0 auto}
.back-link{color:var(--text-dim);text-decoration:none;display:inline-block;margin-bottom:3rem}
.article-icon{font-size:5rem;margin-bottom:2rem}
.article-content{font-size:1.1rem;line-height:1.9}
.article-content h2{font-size:2rem;margin:3rem 0 1rem;color:var(--accent)}
.article-content h3{font-size:1.5rem;margin:2rem 0 1rem}
.article-content p,.article-content li{color:var(--text-dim);margin:1rem 0}
.article-content ul,.article-content ol{padding-left:2rem}
.article-content code{background:var(--card);padding:.2rem .5rem;border-radius:4px;color:var(--accent);font-family:'Courier New',monospace}
.article-content pre{background:var(--card);padding:1.5rem;border-radius:8px;overflow-x:auto;border:1px solid var(--border)}
.article-content pre code{background:none;padding:0}
.article-content blockquote{border-left:4px solid var(--accent);padding-left:1.5rem;font-style:italic;color:var(--text-dim)}
@media(max-width:768px){nav{padding:1rem}.nav-links{gap:1rem}section{padding:4rem 0}.expertise-grid,.blog-grid{grid-template-columns:1fr}}"#;
