//! Full page rendering

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::thumbnail::ThumbnailLoader;

use super::card::{CardInput, render_card};
use super::escape::{escape_attr, escape_html};
use super::layout::{COLUMN_COUNT, distribute};
use super::style::PageStyle;

/// Default thumbnail display width in pixels
pub const DEFAULT_IMAGE_WIDTH: u32 = 220;

/// Renders the hub page from site text and the catalog
///
/// Holds only borrowed, immutable inputs; every call to [`render`](Self::render)
/// is a fresh top-to-bottom pass.
pub struct PageRenderer<'a> {
    site: &'a SiteConfig,
    catalog: &'a Catalog,
    loader: &'a ThumbnailLoader,
    style: PageStyle,
    image_width: u32,
}

impl<'a> PageRenderer<'a> {
    pub fn new(site: &'a SiteConfig, catalog: &'a Catalog, loader: &'a ThumbnailLoader) -> Self {
        Self {
            site,
            catalog,
            loader,
            style: PageStyle::default(),
            image_width: DEFAULT_IMAGE_WIDTH,
        }
    }

    /// Set the thumbnail display width
    pub fn image_width(mut self, width: u32) -> Self {
        self.image_width = width;
        self
    }

    /// Set the page style
    pub fn style(mut self, style: PageStyle) -> Self {
        self.style = style;
        self
    }

    /// Render the complete HTML document
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(16 * 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!(
            "<title>{}</title>\n",
            escape_html(&self.site.page_title)
        ));
        if !self.site.page_icon.is_empty() {
            html.push_str(&favicon(&self.site.page_icon));
        }
        html.push_str(&self.style.to_html());
        html.push_str("</head>\n<body>\n<div class='app'>\n");

        html.push_str(&self.render_sidebar());
        html.push_str(&self.render_main());

        html.push_str("</div>\n</body>\n</html>\n");

        debug!(
            projects = self.catalog.len(),
            bytes = html.len(),
            "Page rendered"
        );
        html
    }

    fn render_sidebar(&self) -> String {
        let site = self.site;
        let mut html = String::from("<aside class='sidebar'>\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape_html(&site.sidebar_heading)));
        html.push_str(&format!("<p>{}</p>\n", escape_html(&site.sidebar_text)));
        html.push_str("<hr>\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape_html(&site.links_heading)));
        html.push_str(&format!(
            "<p>{}: <a class='sidebar-link' href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Enlace</a></p>\n",
            escape_html(&site.links_label),
            escape_attr(&site.links_url)
        ));
        html.push_str("</aside>\n");
        html
    }

    fn render_main(&self) -> String {
        let site = self.site;
        let mut html = String::from("<main class='block-container'>\n");
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(&site.title)));
        html.push_str(&format!(
            "<p class='caption'>{}</p>\n",
            escape_html(&site.caption)
        ));
        html.push_str("<hr>\n");
        html.push_str(&format!(
            "<h2>{}</h2>\n",
            escape_html(&site.collection_heading)
        ));
        html.push_str(&self.render_grid());
        html.push_str("<hr>\n");
        html.push_str(&format!(
            "<p class='caption footer'>{}</p>\n",
            escape_html(&site.footer_tip)
        ));
        html.push_str("</main>\n");
        html
    }

    fn render_grid(&self) -> String {
        // Cards are rendered in catalog order, then placed round-robin.
        let cards: Vec<String> = self
            .catalog
            .entries()
            .iter()
            .map(|entry| {
                let repo_url = self.catalog.repo_url(entry);
                let input = CardInput {
                    title: &entry.title,
                    description: &entry.description,
                    repo_url: &repo_url,
                    app_url: entry.app_url.as_deref(),
                    image: entry.image_name.as_deref(),
                };
                render_card(&input, self.loader, self.image_width)
            })
            .collect();

        let mut html = String::from("<div class='grid'>\n");
        for (column, slots) in distribute(cards, COLUMN_COUNT).into_iter().enumerate() {
            html.push_str(&format!("<div class='column' data-column='{}'>\n", column));
            for slot in slots {
                html.push_str(&slot.item);
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
        html
    }
}

/// Emoji favicon as a base64 SVG `data:` URI
fn favicon(icon: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
        escape_html(icon)
    );
    format!(
        "<link rel=\"icon\" href=\"data:image/svg+xml;base64,{}\">\n",
        BASE64.encode(svg)
    )
}
