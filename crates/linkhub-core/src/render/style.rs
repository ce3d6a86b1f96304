//! Page-wide style block

/// Palette and stylesheet applied once at the top of every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStyle {
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub card: &'static str,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self::dark()
    }
}

impl PageStyle {
    /// Black background, white text
    pub const fn dark() -> Self {
        Self {
            background: "#000",
            foreground: "#fff",
            muted: "#bdbdbd",
            card: "#0b0b0b",
        }
    }

    /// The `<style>` element for this palette
    pub fn to_html(&self) -> String {
        format!(
            "<style>\n:root {{ --bg:{bg}; --fg:{fg}; --muted:{muted}; --card:{card}; --accent:{fg}; }}\n{rules}</style>\n",
            bg = self.background,
            fg = self.foreground,
            muted = self.muted,
            card = self.card,
            rules = RULES,
        )
    }
}

const RULES: &str = r#"* { box-sizing: border-box; }
html, body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
.app { display: flex; min-height: 100vh; }
aside.sidebar { width: 300px; flex-shrink: 0; padding: 2rem 1.25rem; background: #000000; border-right: 1px solid #111; }
main.block-container { flex: 1; padding: 1.5rem 2.5rem 2.5rem 2.5rem; }
h1, h2, h3, h4, h5, h6, p, span, li, label, div { color: var(--fg); }
a, a:visited { color: var(--fg); text-decoration: underline; }
.caption { color: var(--muted); font-size: .875rem; margin-top: 0; }
.grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 1rem; align-items: start; }
.column { display: flex; flex-direction: column; gap: 1rem; }
.card {
  background: var(--card);
  border: 1px solid #1a1a1a;
  border-radius: 18px;
  padding: 16px 16px 14px 16px;
}
.card h3 { margin: 0 0 .25rem 0; font-size: 1.05rem; letter-spacing: .2px; }
.card p { margin: .25rem 0 .75rem 0; color: var(--muted); font-size: .925rem; }
.card img.thumb { display: block; max-width: 100%; height: auto; border-radius: 10px; margin-bottom: .5rem; }
.btnrow { display: flex; gap: .5rem; flex-wrap: wrap; }
.btnrow > * { flex: 1 1 0; }
.btn { display: block; text-align: center; padding: .45rem .75rem; border: 1px solid #333; border-radius: 10px; text-decoration: none !important; }
.btn:hover { border-color: var(--fg); }
.btn-primary { background: var(--fg); color: var(--bg) !important; }
.small { color: var(--muted); font-size: .85rem; }
hr { border: none; border-top: 1px solid #151515; margin: 24px 0; }
.badge { display: inline-block; font-size: .72rem; padding: .2rem .45rem; border: 1px solid #222; border-radius: 8px; color: #bbb; margin-bottom: .5rem; }
@media (max-width: 900px) {
  .app { flex-direction: column; }
  aside.sidebar { width: auto; border-right: none; border-bottom: 1px solid #111; }
  .grid { grid-template-columns: 1fr; }
}
"#;
