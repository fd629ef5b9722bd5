//! Layout components - navigation, headers, cards

/// Escapes text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{}</p>"#, escape(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{}</h1>
            {subtitle_html}
        </div>"#,
        escape(title)
    )
}

/// Renders a card container with an optional header.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| {
            format!(
                r#"<h3 class="text-lg font-semibold text-white mb-6">{}</h3>"#,
                escape(t)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar.
///
/// Highlights the active page based on the provided page identifier.
pub fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "text-marquee-500 bg-marquee-500 bg-opacity-10"
        } else {
            "text-gray-300 hover:text-marquee-500 hover:bg-gray-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <a href="/" class="text-2xl font-bold text-marquee-500">Marquee</a>
                        <div class="hidden md:flex space-x-6">
                            {}
                            {}
                        </div>
                    </div>
                    <form action="/search" method="get" class="flex items-center">
                        <input type="text" name="q" placeholder="Search movies, TV shows..."
                               class="w-64 px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-marquee-500 focus:border-transparent">
                    </form>
                </div>
            </div>
        </nav>"#,
        nav_item("/", "Home", "home"),
        nav_item("/search", "Search", "search")
    )
}

/// Renders a styled anchor that looks like a button.
pub fn link_button(text: &str, href: &str, variant: &str) -> String {
    let base_classes = "inline-block px-4 py-2 rounded-lg font-medium transition-colors";

    let variant_classes = match variant {
        "primary" => "bg-marquee-500 hover:bg-marquee-600 text-white",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white",
        _ => "bg-gray-600 hover:bg-gray-700 text-white",
    };

    format!(r#"<a href="{href}" class="{base_classes} {variant_classes}">{text}</a>"#)
}

/// Renders an empty-state panel with a headline and hint.
pub fn empty_state(headline: &str, hint: &str) -> String {
    format!(
        r#"<div class="text-center py-12 bg-gray-800/50 rounded-lg">
            <p class="text-xl text-gray-400">{}</p>
            <p class="text-gray-500 mt-2">{}</p>
        </div>"#,
        escape(headline),
        escape(hint)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>"x" & 'y'</script>"#),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("plain title"), "plain title");
    }

    #[test]
    fn nav_bar_highlights_active_page() {
        let nav = nav_bar("search");
        assert!(nav.contains(r#"href="/search" class="px-3 py-2 rounded-md text-sm font-medium transition-colors text-marquee-500"#));
    }

    #[test]
    fn page_header_escapes_title() {
        let header = page_header("<b>Results</b>", None);
        assert!(header.contains("&lt;b&gt;Results&lt;/b&gt;"));
    }
}
