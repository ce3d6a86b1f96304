//! Project card markup

use crate::thumbnail::{ThumbnailLoader, render_thumbnail};

use super::escape::{escape_attr, escape_html};

/// Label of the repository button
pub const REPO_LABEL: &str = "GitHub";
/// Label of the demo button
pub const APP_LABEL: &str = "Abrir app";
/// Shown in place of the demo button when nothing is deployed yet
pub const NO_DEMO_NOTE: &str = "Añade la URL de despliegue para mostrar este botón.";

/// Everything a card shows
#[derive(Debug, Clone, Copy)]
pub struct CardInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub repo_url: &'a str,
    pub app_url: Option<&'a str>,
    pub image: Option<&'a str>,
}

/// Render one card
///
/// Stateless. The thumbnail is omitted when `image` is `None`, and replaced by
/// the placeholder badge when it cannot be loaded.
pub fn render_card(input: &CardInput<'_>, loader: &ThumbnailLoader, image_width: u32) -> String {
    let mut html = String::from("<div class='card'>\n");

    if let Some(image) = input.image {
        html.push_str(&render_thumbnail(loader, image, image_width, input.title));
        html.push('\n');
    }

    html.push_str(&format!("<h3>{}</h3>\n", escape_html(input.title)));
    html.push_str(&format!("<p>{}</p>\n", escape_html(input.description)));

    html.push_str("<div class='btnrow'>\n");
    html.push_str(&link_button("btn btn-repo", input.repo_url, REPO_LABEL));
    match input.app_url {
        Some(app_url) => html.push_str(&link_button("btn btn-primary btn-app", app_url, APP_LABEL)),
        None => html.push_str(&format!(
            "<div class='small no-demo'>{}</div>\n",
            escape_html(NO_DEMO_NOTE)
        )),
    }
    html.push_str("</div>\n</div>\n");

    html
}

fn link_button(class: &str, href: &str, label: &str) -> String {
    format!(
        "<a class='{}' href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
        class,
        escape_attr(href),
        escape_html(label)
    )
}
