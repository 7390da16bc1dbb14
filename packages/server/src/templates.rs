//! Embedded Tera templates for the public site and the admin panel.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// Global template engine, compiled once from the embedded sources.
static TEMPLATES: Lazy<Result<Tera, tera::Error>> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", BASE_TEMPLATE),
        ("admin_base.html", ADMIN_BASE_TEMPLATE),
        ("home.html", HOME_TEMPLATE),
        ("placeholder.html", PLACEHOLDER_TEMPLATE),
        ("login.html", LOGIN_TEMPLATE),
        ("page_list.html", PAGE_LIST_TEMPLATE),
        ("page_editor.html", PAGE_EDITOR_TEMPLATE),
        ("help.html", HELP_TEMPLATE),
        ("error.html", ERROR_TEMPLATE),
    ])?;
    Ok(tera)
});

pub fn render(name: &str, context: &Context) -> Result<String, tera::Error> {
    match TEMPLATES.as_ref() {
        Ok(tera) => tera.render(name, context),
        Err(e) => Err(tera::Error::msg(format!("template engine failed to load: {e}"))),
    }
}

/// Render a template into an HTML response, or a 500 on template failure.
pub fn render_page(name: &str, context: &Context) -> Response {
    render_with_status(StatusCode::OK, name, context)
}

pub fn render_with_status(status: StatusCode, name: &str, context: &Context) -> Response {
    match render(name, context) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Template error in {}: {:?}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

pub fn render_not_found(message: &str, back_url: &str) -> Response {
    let mut context = Context::new();
    context.insert("message", message);
    context.insert("back_url", back_url);
    render_with_status(StatusCode::NOT_FOUND, "error.html", &context)
}

/// Generic failure page. The detail is logged by the caller, never shown.
pub fn render_server_error() -> Response {
    let mut context = Context::new();
    context.insert("heading", "Something went wrong");
    context.insert("message", "An unexpected error occurred. Please try again.");
    render_with_status(StatusCode::INTERNAL_SERVER_ERROR, "error.html", &context)
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}REEMS{% endblock %}</title>
    <style>
        :root { --primary: #b4232a; --text: #1f2933; --muted: #52606d; --bg: #f5f7fa; --border: #e4e7eb; }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; color: var(--text); line-height: 1.6; }
        a { color: var(--primary); }
        .container { max-width: 1120px; margin: 0 auto; padding: 0 24px; }
        section { padding: 72px 0; border-bottom: 1px solid var(--border); }
        section:nth-child(even) { background: var(--bg); }
        h1 { font-size: 2.75rem; line-height: 1.15; margin-bottom: 16px; }
        h2 { font-size: 2rem; margin-bottom: 12px; }
        h3 { font-size: 1.2rem; margin-bottom: 8px; }
        .lead { font-size: 1.25rem; color: var(--muted); margin-bottom: 24px; }
        .grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
        .card { background: #fff; border: 1px solid var(--border); border-radius: 8px; padding: 24px; }
        .btn { display: inline-block; padding: 12px 24px; border-radius: 6px; text-decoration: none; font-weight: 600; border: 2px solid var(--primary); }
        .btn-primary { background: var(--primary); color: #fff; }
        .btn-secondary { color: var(--primary); }
        ul.bullets { margin: 12px 0 0 20px; }
        .photos { display: flex; gap: 8px; flex-wrap: wrap; margin: 12px 0; }
        .photos img { width: 160px; height: 110px; object-fit: cover; border-radius: 4px; }
        .caption { font-size: 0.85rem; color: var(--muted); background: var(--bg); padding: 6px 10px; border-radius: 4px; }
        form.contact { display: grid; gap: 12px; max-width: 560px; }
        form.contact input, form.contact textarea { padding: 10px; border: 1px solid var(--border); border-radius: 4px; font: inherit; }
        .notice { padding: 12px; border-radius: 4px; margin-top: 12px; }
        .notice.ok { background: #e3f9e5; color: #05400a; }
        .notice.err { background: #ffe3e3; color: #610404; }
        code { background: var(--bg); padding: 4px 8px; border-radius: 4px; }
    </style>
</head>
<body>
    {% block content %}{% endblock %}
</body>
</html>
"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ hero.headline }} | REEMS{% endblock %}
{% block content %}
<section id="hero">
    <div class="container">
        <h1>{{ hero.headline }}</h1>
        <p class="lead">{{ hero.subheadline }}</p>
        <p>
            <a class="btn btn-primary" href="#capabilities">{{ hero.buttons.primary }}</a>
            <a class="btn btn-secondary" href="#contact">{{ hero.buttons.secondary }}</a>
        </p>
        <p>{{ hero.description }}</p>
        <div class="card" style="margin-top: 32px">
            <p>{{ intro.text }}</p>
            {% if intro.bullets %}<ul class="bullets">{% for bullet in intro.bullets %}<li>{{ bullet }}</li>{% endfor %}</ul>{% endif %}
            {% if intro.ctaButton %}<p style="margin-top: 16px"><a class="btn btn-primary" href="#contact">{{ intro.ctaButton }}</a></p>{% endif %}
        </div>
    </div>
</section>

<section id="markets">
    <div class="container">
        <h2>{{ marketSegments.title }}</h2>
        <p class="lead">{{ marketSegments.subtitle }}</p>
        <div class="grid">
            {% for segment in marketSegments.segments %}
            <div class="card">
                <h3>{{ segment.title }}</h3>
                <p>{{ segment.leadText }}</p>
                {% if segment.bullets %}<ul class="bullets">{% for bullet in segment.bullets %}<li>{{ bullet }}</li>{% endfor %}</ul>{% endif %}
            </div>
            {% endfor %}
        </div>
    </div>
</section>

<section id="lifecycle">
    <div class="container">
        <h2>{{ lifecycle.title }}</h2>
        <p class="lead">{{ lifecycle.intro }}</p>
        <ol class="grid">
            {% for phase in lifecycle.phases %}
            <li class="card"><h3>{{ phase.title }}</h3><p>{{ phase.text }}</p></li>
            {% endfor %}
        </ol>
    </div>
</section>

<section id="capabilities">
    <div class="container">
        <h2>{{ capabilities.title }}</h2>
        <p class="lead">{{ capabilities.subtitle }}</p>
        <div class="grid">
            {% for item in capabilities.items %}
            <div class="card">
                <h3>{{ item.title }}</h3>
                <div class="photos">
                    {% if item.photoUrls %}
                        {% for photo in item.photoUrls %}<img src="{{ photo.url }}" alt="{{ photo.alt }}" loading="lazy">{% endfor %}
                    {% else %}
                        {% for caption in item.photos %}<span class="caption">{{ caption }}</span>{% endfor %}
                    {% endif %}
                </div>
                <p>{{ item.text }}</p>
                {% if item.additionalBullets %}<ul class="bullets">{% for bullet in item.additionalBullets %}<li>{{ bullet }}</li>{% endfor %}</ul>{% endif %}
                {% if item.additionalText %}<p style="margin-top: 12px">{{ item.additionalText }}</p>{% endif %}
            </div>
            {% endfor %}
        </div>
    </div>
</section>

<section id="wheels">
    <div class="container">
        <h2>{{ forgedWheels.title }}</h2>
        <p class="lead">{{ forgedWheels.subtitle }}</p>
        <p>{{ forgedWheels.text }}</p>
        {% if forgedWheels.bullets %}<ul class="bullets">{% for bullet in forgedWheels.bullets %}<li>{{ bullet }}</li>{% endfor %}</ul>{% endif %}
        {% if forgedWheels.ctaButton %}<p style="margin-top: 16px"><a class="btn btn-primary" href="#contact">{{ forgedWheels.ctaButton }}</a></p>{% endif %}
    </div>
</section>

<section id="company">
    <div class="container">
        <h2>{{ company.title }}</h2>
        <p class="lead">{{ company.subtitle }}</p>
        <p>{{ company.text }}</p>
        {% if company.slogan %}<p style="margin-top: 16px"><strong>{{ company.slogan }}</strong></p>{% endif %}
    </div>
</section>

<section id="contact">
    <div class="container">
        {% if company.finalCta %}<h2>{{ company.finalCta }}</h2>{% else %}<h2>Contact us</h2>{% endif %}
        <form class="contact" id="contact-form">
            <input name="name" placeholder="Name" required>
            <input name="email" type="email" placeholder="Email" required>
            <input name="company" placeholder="Company">
            <textarea name="message" rows="5" placeholder="Project details" required></textarea>
            <button class="btn btn-primary" type="submit">Send request</button>
            <div id="contact-result"></div>
        </form>
    </div>
</section>
<script>
document.getElementById("contact-form").addEventListener("submit", async function (event) {
    event.preventDefault();
    const form = event.target;
    const result = document.getElementById("contact-result");
    const button = form.querySelector("button");
    button.disabled = true;
    try {
        const res = await fetch("/api/contact", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify(Object.fromEntries(new FormData(form))),
        });
        const body = await res.json();
        result.className = "notice " + (res.ok ? "ok" : "err");
        result.textContent = res.ok ? "Thank you! We will get back to you shortly." : body.message;
        if (res.ok) form.reset();
    } catch (e) {
        result.className = "notice err";
        result.textContent = "Something went wrong. Please try again.";
    } finally {
        button.disabled = false;
    }
});
</script>
{% endblock %}
"##;

const PLACEHOLDER_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}Page Not Found | REEMS{% endblock %}
{% block content %}
<section>
    <div class="container" style="text-align: center">
        <h1>Page Not Found</h1>
        <p class="lead">The {{ slug }} page data has not been seeded yet. Please run:</p>
        <code>cargo run --bin seed</code>
    </div>
</section>
{% endblock %}
"##;

const ERROR_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ heading | default(value="Not Found") }} | REEMS{% endblock %}
{% block content %}
<section>
    <div class="container" style="text-align: center">
        <h1>{{ heading | default(value="Not Found") }}</h1>
        <p class="lead">{{ message }}</p>
        <a href="{{ back_url | default(value="/") }}">Go back</a>
    </div>
</section>
{% endblock %}
"##;

const ADMIN_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}REEMS Admin{% endblock %}</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; background: #f9fafb; color: #111827; line-height: 1.5; }
        a { color: #2563eb; text-decoration: none; }
        header { background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,.08); }
        .bar { max-width: 1120px; margin: 0 auto; padding: 16px 24px; display: flex; justify-content: space-between; align-items: center; }
        .bar .who { color: #4b5563; font-size: .9rem; margin-left: 12px; }
        main { max-width: 1120px; margin: 0 auto; padding: 32px 24px; }
        h1 { font-size: 1.8rem; margin-bottom: 8px; }
        .muted { color: #6b7280; font-size: .9rem; }
        .card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.1); padding: 24px; margin-bottom: 24px; }
        table { width: 100%; border-collapse: collapse; background: #fff; }
        th, td { text-align: left; padding: 12px 16px; border-bottom: 1px solid #e5e7eb; }
        th { font-size: .75rem; text-transform: uppercase; color: #6b7280; background: #f9fafb; }
        .tag { display: inline-block; background: #dbeafe; color: #1e40af; border-radius: 4px; padding: 2px 8px; font-size: .85rem; font-weight: 600; }
        label { display: block; font-weight: 600; font-size: .9rem; margin: 12px 0 4px; }
        input[type=text], input[type=email], input[type=password], textarea { width: 100%; padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 6px; font: inherit; }
        textarea.mono { font-family: ui-monospace, monospace; font-size: .9rem; }
        button { padding: 8px 16px; border-radius: 6px; border: 0; background: #2563eb; color: #fff; font: inherit; cursor: pointer; }
        button.secondary { background: #e5e7eb; color: #374151; }
        .banner { padding: 12px; border-radius: 6px; margin-bottom: 16px; }
        .banner.ok { background: #f0fdf4; border: 1px solid #bbf7d0; color: #166534; }
        .banner.err { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; }
        details summary { cursor: pointer; color: #2563eb; margin-top: 12px; }
        .thumbs { display: flex; gap: 8px; flex-wrap: wrap; margin-top: 8px; }
        .thumbs img { width: 96px; height: 64px; object-fit: cover; border-radius: 4px; }
    </style>
</head>
<body>
    {% if current_user %}
    <header>
        <div class="bar">
            <div><strong>REEMS Admin</strong><span class="who">({{ current_user.email }})</span></div>
            <div>
                <a href="/admin/page-list">Pages</a> &middot; <a href="/admin/help">Help</a>
                <form method="post" action="/admin/logout" style="display: inline; margin-left: 12px">
                    <button class="secondary" type="submit">Log out</button>
                </form>
            </div>
        </div>
    </header>
    {% endif %}
    <main>
        {% block content %}{% endblock %}
    </main>
</body>
</html>
"##;

const LOGIN_TEMPLATE: &str = r##"{% extends "admin_base.html" %}
{% block title %}Log in | REEMS Admin{% endblock %}
{% block content %}
<div class="card" style="max-width: 420px; margin: 64px auto">
    <h1>REEMS Admin</h1>
    <p class="muted">Sign in to edit site content.</p>
    {% if error %}<div class="banner err" style="margin-top: 16px">{{ error }}</div>{% endif %}
    <form method="post" action="/admin/login">
        <label for="email">Email</label>
        <input id="email" type="email" name="email" value="{{ email | default(value="") }}" required autofocus>
        <label for="password">Password</label>
        <input id="password" type="password" name="password" required>
        <p style="margin-top: 16px"><button type="submit">Log in</button></p>
    </form>
</div>
{% endblock %}
"##;

const PAGE_LIST_TEMPLATE: &str = r##"{% extends "admin_base.html" %}
{% block title %}Pages | REEMS Admin{% endblock %}
{% block content %}
<h1>Pages</h1>
<div class="card" style="padding: 0; overflow: hidden">
    <table>
        <thead><tr><th>Title</th><th>Slug</th><th>Last update</th><th></th></tr></thead>
        <tbody>
            {% for page in pages %}
            <tr>
                <td><strong>{{ page.title }}</strong></td>
                <td class="muted">{{ page.slug }}</td>
                <td class="muted">{{ page.updated_at }}</td>
                <td style="text-align: right"><a href="/admin/pages/{{ page.slug }}">Edit</a></td>
            </tr>
            {% endfor %}
        </tbody>
    </table>
    {% if not pages %}
    <p class="muted" style="padding: 32px; text-align: center">No pages found. Run the seed command to create the initial content.</p>
    {% endif %}
</div>
{% endblock %}
"##;

const PAGE_EDITOR_TEMPLATE: &str = r##"{% extends "admin_base.html" %}
{% block title %}{{ page.title }} | REEMS Admin{% endblock %}
{% block content %}
<a href="/admin/page-list" class="muted">&larr; Back to pages</a>
<h1>{{ page.title }}</h1>
<p class="muted" style="margin-bottom: 24px">Slug: {{ page.slug }}</p>

{% for block in blocks %}
<div class="card" id="block-{{ block.id }}">
    <span class="tag">{{ block.block_type }}</span>
    <span class="muted">Key: {{ block.key }}{% if block.role == "header" %} &middot; section header{% endif %}</span>

    {% if block.saved %}<div class="banner ok" data-autodismiss style="margin-top: 12px">Block updated successfully.</div>{% endif %}
    {% if block.error %}<div class="banner err" style="margin-top: 12px">{{ block.error }}</div>{% endif %}

    {% if block.title %}<label>Title</label><p>{{ block.title }}</p>{% endif %}
    {% if block.subtitle %}<label>Subtitle</label><p>{{ block.subtitle }}</p>{% endif %}
    {% if block.body %}<label>Text</label><p style="white-space: pre-wrap">{{ block.body }}</p>{% endif %}
    {% if block.bullets %}<label>Bullets</label><ul style="margin-left: 20px">{% for bullet in block.bullets %}<li>{{ bullet }}</li>{% endfor %}</ul>{% endif %}
    {% if block.images %}<label>Images</label><div class="thumbs">{% for img in block.images %}<img src="{{ img.url }}" alt="{{ img.alt | default(value="") }}">{% endfor %}</div>{% endif %}

    <details {% if block.editing %}open{% endif %}>
        <summary>Edit</summary>
        <form method="post" action="/admin/pages/{{ page.slug }}/blocks/{{ block.id }}">
            <label>Title</label>
            <input type="text" name="title" value="{{ block.form.title }}">
            <label>Subtitle</label>
            <input type="text" name="subtitle" value="{{ block.form.subtitle }}">
            <label>Text</label>
            <textarea name="body" rows="4">{{ block.form.body }}</textarea>
            <label>Bullets (one per line)</label>
            <textarea class="mono" name="bullets" rows="6" placeholder="Enter each bullet on its own line">{{ block.form.bullets }}</textarea>
            <p style="margin-top: 12px"><button type="submit">Save</button></p>
        </form>
        <form class="upload" data-block-id="{{ block.id }}" style="margin-top: 16px">
            <label>Upload image (JPEG, PNG or WebP, up to 5 MB)</label>
            <input type="file" name="file" accept="image/jpeg,image/png,image/webp" required>
            <input type="text" name="alt" placeholder="Alt text" style="margin-top: 8px">
            <p style="margin-top: 8px"><button class="secondary" type="submit">Upload</button> <span class="upload-result muted"></span></p>
        </form>
    </details>
</div>
{% endfor %}

{% if not blocks %}
<div class="card muted" style="text-align: center">No blocks found for this page.</div>
{% endif %}

<script>
setTimeout(function () {
    document.querySelectorAll("[data-autodismiss]").forEach(function (el) { el.remove(); });
}, 3000);
document.querySelectorAll("form.upload").forEach(function (form) {
    form.addEventListener("submit", async function (event) {
        event.preventDefault();
        const data = new FormData(form);
        data.append("blockId", form.dataset.blockId);
        const status = form.querySelector(".upload-result");
        status.textContent = "Uploading...";
        const res = await fetch("/api/admin/upload-image", { method: "POST", body: data });
        const body = await res.json().catch(function () { return {}; });
        if (res.ok) {
            window.location.reload();
        } else {
            status.textContent = body.message || "Upload failed";
        }
    });
});
</script>
{% endblock %}
"##;

const HELP_TEMPLATE: &str = r##"{% extends "admin_base.html" %}
{% block title %}Help | REEMS Admin{% endblock %}
{% block content %}
<h1>Help</h1>
<div class="card">
    <h3>Pages</h3>
    <p>The page list shows every page of the site with its slug and the date it was last changed.</p>
    <h3 style="margin-top: 16px">Editing blocks</h3>
    <p>Each page is made of blocks. A block has a type (HERO, INTRO, MARKET_SEGMENT, ...) and a unique key.
       Open "Edit" on a block to change its title, subtitle, text and bullet list. Put each bullet on its own line;
       empty lines are ignored. Leaving a field empty removes it from the site.</p>
    <h3 style="margin-top: 16px">Saving</h3>
    <p>Changes are stored immediately and the public site shows them on the next page load.</p>
    <h3 style="margin-top: 16px">Images</h3>
    <p>Capability blocks can carry photos. Upload JPEG, PNG or WebP files of at most 5 MB from the block's edit panel.</p>
</div>
{% endblock %}
"##;
