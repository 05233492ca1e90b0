//! HTML rendering for the portfolio page.

use crate::domain::profile::Profile;

/// Gallery entries shown on the page.
pub const GALLERY_PREVIEW: usize = 3;

const STYLE: &str = "body{margin:0;font-family:system-ui,sans-serif;background:#fafafa;color:#262626}\
.hero{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;background:#171717;color:#fff;text-align:center}\
.avatar{width:10rem;height:10rem;border-radius:50%;object-fit:cover;border:4px solid rgba(255,255,255,.1)}\
h1{font-size:4rem;font-weight:300;margin:1rem 0}\
.tagline{color:#a3a3a3;font-size:1.5rem}\
.links a{display:inline-block;margin:.25rem;padding:.75rem 1.5rem;border-radius:9999px;border:1px solid rgba(255,255,255,.2);color:inherit;text-decoration:none}\
section{padding:6rem 1rem;max-width:64rem;margin:0 auto}\
.label{text-transform:uppercase;letter-spacing:.2em;color:#a3a3a3;font-size:.875rem}\
.gallery{display:grid;grid-template-columns:repeat(3,1fr);gap:2rem}\
.gallery img{width:100%;aspect-ratio:1;object-fit:cover;border-radius:1rem}\
footer{background:#171717;color:#fff;text-align:center;padding:4rem 1rem}\
.error{min-height:100vh;display:flex;align-items:center;justify-content:center;color:#525252}";

/// Escapes text for use in HTML content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

/// Social links, each only when the profile has a value for it.
fn social_links(profile: &Profile, instagram: &str, whatsapp: &str) -> String {
    let mut out = String::new();
    if !profile.instagram().is_empty() {
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            escape_html(profile.instagram()),
            instagram
        ));
    }
    if !profile.whatsapp().is_empty() {
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            escape_html(profile.whatsapp()),
            whatsapp
        ));
    }
    out
}

/// Renders the full portfolio page for `profile`.
pub fn render_profile_page(profile: &Profile, year: i32) -> String {
    let name = escape_html(profile.name());
    let email = escape_html(profile.email().as_str());
    let avatar = escape_html(profile.avatar());
    let mailto = format!("<a href=\"mailto:{}\">Email</a>\n", email);

    let mut body = String::new();

    // Hero
    body.push_str(&format!(
        "<header class=\"hero\">\n<img class=\"avatar\" src=\"{avatar}\" alt=\"{name}\">\n\
<h1>{name}</h1>\n<p class=\"tagline\">Traveler · Dreamer · Storyteller</p>\n\
<nav class=\"links\">\n{mailto}{socials}</nav>\n</header>\n",
        socials = social_links(profile, "Instagram", "WhatsApp"),
    ));

    // About
    body.push_str(&format!(
        "<section class=\"about\">\n<span class=\"label\">About Me</span>\n\
<p class=\"bio\">{bio}</p>\n<ul>\n<li>{name}</li>\n<li>{email}</li>\n\
<li>Exploring the World</li>\n</ul>\n<div class=\"links\">\n{socials}</div>\n\
<img src=\"{avatar}\" alt=\"About\">\n</section>\n",
        bio = escape_html(profile.bio()),
        socials = social_links(profile, "Follow on Instagram", "Chat on WhatsApp"),
    ));

    // Gallery
    body.push_str(
        "<section class=\"gallery-section\">\n<span class=\"label\">Gallery</span>\n\
<h2>Moments Captured</h2>\n<div class=\"gallery\">\n",
    );
    for (index, image) in profile.gallery().iter().take(GALLERY_PREVIEW).enumerate() {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"Gallery {}\">\n",
            escape_html(image),
            index + 1
        ));
    }
    body.push_str("</div>\n</section>\n");

    // Footer
    body.push_str(&format!(
        "<footer>\n<h3>Let's Connect</h3>\n\
<p>Ready to share experiences or discuss travel destinations?</p>\n\
<nav class=\"links\">\n{mailto}{socials}</nav>\n\
<p class=\"copyright\">© {year} {name}. All rights reserved.</p>\n</footer>\n",
        socials = social_links(profile, "Instagram", "WhatsApp"),
    ));

    document(profile.name(), &body)
}

/// Renders the page shown when the profile could not be loaded.
pub fn render_error_page(reason: &str) -> String {
    document(
        "Portfolio",
        &format!(
            "<div class=\"error\">Failed to load profile: {}</div>\n",
            escape_html(reason)
        ),
    )
}
