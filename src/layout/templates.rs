//! Liquid sources of the three generated pages.
//!
//! Admin-authored text always goes through `escape`. Only `css` and the
//! rendered markdown `content` are inserted raw.

macro_rules! head {
    ($title:literal, $description:literal) => {
        concat!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
            "    <meta charset=\"UTF-8\">\n",
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "    <title>", $title, "</title>\n",
            "    <meta name=\"description\" content=\"", $description, "\">\n",
            "    <style>{{ css }}</style>\n",
            "</head>\n<body>\n"
        )
    };
}

macro_rules! nav {
    () => {
        r##"    <nav>
        <div class="nav-content">
            <a href="{{ links.home }}" class="logo">{{ logo | escape }}</a>
            <ul class="nav-links">
{% for item in links.nav %}                <li><a href="{{ item.href }}">{{ item.label }}</a></li>
{% endfor %}            </ul>
        </div>
    </nav>
"##
    };
}

macro_rules! post_card {
    ($card:literal) => {
        concat!(
            "                <a href=\"{{ ", $card, ".url }}\" class=\"blog-card\">\n",
            "                    <div class=\"blog-image\">{{ ", $card, ".icon | escape }}</div>\n",
            "                    <div class=\"blog-content\">\n",
            "                        <div class=\"blog-meta\">\n",
            "                            <span class=\"blog-tag-small\">{{ ", $card, ".category | escape }}</span>\n",
            "                            <span>•</span><span>{{ ", $card, ".date | escape }}</span>\n",
            "                            <span>•</span><span>{{ ", $card, ".read_time | escape }}</span>\n",
            "                        </div>\n",
            "                        <h3>{{ ", $card, ".title | escape }}</h3>\n",
            "                        <p class=\"blog-excerpt\">{{ ", $card, ".excerpt | escape }}</p>\n",
            "                        <span class=\"read-more\">Read More →</span>\n",
            "                    </div>\n",
            "                </a>\n"
        )
    };
}

macro_rules! footer {
    () => {
        r##"    <footer>
        <div class="container">
{% if footer.tagline != "" %}            <p class="terminal">{{ footer.tagline | escape }}</p>
{% endif %}            <p>{{ footer.text | escape }}</p>
        </div>
    </footer>
</body>
</html>
"##
    };
}

pub const HOME_TEMPLATE: &str = concat!(
    head!("{{ site.name | escape }} - {{ site.title | escape }}", "{{ site.description | escape }}"),
    nav!(),
    r##"    <div class="container">
        <section class="hero" id="home">
            <div class="hero-content">
                <div class="hero-tag">{{ hero.tag | escape }}</div>
                <h1>{{ hero.title | escape }}</h1>
                <p class="hero-description">{{ hero.description | escape }}</p>
                <div class="cta-buttons">
                    <a href="#contact" class="btn btn-primary">Get in Touch →</a>
{% if social_handle != "" %}                    <a href="https://x.com/{{ social_handle | url_encode }}" target="_blank" class="btn btn-secondary">Follow on X</a>
{% endif %}                </div>
            </div>
        </section>

        <section id="expertise">
            <div class="section-header">
                <div class="section-tag">What I Do</div>
                <h2>Expertise</h2>
            </div>
            <div class="expertise-grid">
{% for item in expertise %}                <div class="expertise-card">
                    <div class="expertise-icon">{{ item.icon | escape }}</div>
                    <h3>{{ item.title | escape }}</h3>
                    <p>{{ item.description | escape }}</p>
                </div>
{% endfor %}            </div>
        </section>

        <section id="skills">
            <div class="section-header">
                <div class="section-tag">Tech Stack</div>
                <h2>Skills &amp; Tools</h2>
            </div>
            <div class="skills-container">{% for skill in skills %}<span class="skill-tag">{{ skill | escape }}</span>{% endfor %}</div>
        </section>
{% if featured %}
        <section id="blog">
            <div class="section-header">
                <div class="section-tag">Latest Insight</div>
                <h2>Featured Post</h2>
            </div>
            <div class="featured-post">
"##,
    post_card!("featured"),
    r##"                <a href="{{ links.blog }}" class="btn btn-secondary">View All Posts →</a>
            </div>
        </section>
{% endif %}
        <section id="contact">
            <div class="section-header">
                <div class="section-tag">Let's Connect</div>
                <h2>Get in Touch</h2>
            </div>
            <div class="contact-links">
{% if social_handle != "" %}                <a href="https://x.com/{{ social_handle | url_encode }}" target="_blank" class="contact-link">𝕏 {{ site.twitter | escape }}</a>
{% endif %}{% if site.email != "" %}                <a href="mailto:{{ site.email | escape }}" class="contact-link">✉️ {{ site.email | escape }}</a>
{% endif %}            </div>
        </section>
    </div>

"##,
    footer!()
);

pub const BLOG_TEMPLATE: &str = concat!(
    head!("Blog - {{ site.name | escape }}", "{{ site.description | escape }}"),
    nav!(),
    r##"    <div class="container">
        <section>
            <div class="section-header">
                <div class="section-tag">Latest Insights</div>
                <h2>All Blog Posts</h2>
            </div>
            <div class="blog-grid">
{% for card in posts %}"##,
    post_card!("card"),
    r##"{% endfor %}            </div>
        </section>
    </div>

"##,
    footer!()
);

pub const POST_TEMPLATE: &str = concat!(
    head!("{{ post.title | escape }} - {{ site.name | escape }}", "{{ post.excerpt | escape }}"),
    nav!(),
    r##"    <div class="container">
        <article class="article">
            <a href="{{ links.blog }}" class="back-link">← Back to Blog</a>
            <div class="article-icon">{{ post.icon | escape }}</div>
            <div class="article-meta">
                <span class="article-category">{{ post.category | escape }}</span>
                <span>•</span><span>{{ post.date | escape }}</span>
                <span>•</span><span>{{ post.read_time | escape }}</span>
            </div>
            <h1>{{ post.title | escape }}</h1>
            <div class="article-content">{{ content }}</div>
        </article>
    </div>

    <footer>
        <div class="container">
            <p>© {{ year | escape }} {{ site.name | escape }}</p>
        </div>
    </footer>
</body>
</html>
"##
);
