//! Full page handlers composing components into complete HTML responses.
//!
//! All pages share the same base layout with Tailwind via CDN. Handlers
//! return `Result<Html<String>, PageError>`; the error side renders the
//! fallback view.

pub mod home;
pub mod movie;
pub mod search;
pub mod show;
pub mod watch;

use axum::response::Html;

use crate::components::layout;

// Re-export page handlers
pub use home::home_page;
pub use movie::movie_page;
pub use search::search_page;
pub use show::{season_page, show_page};
pub use watch::{watch_movie_page, watch_show_page};

/// Wraps page content in the shared document shell.
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'marquee': {{
                                    400: '#ff8a5c',
                                    500: '#ff6b35',
                                    600: '#e5531f'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
        </head>
        <body class="bg-gray-900 min-h-screen">
            {}
            <main class="max-w-7xl mx-auto px-4 py-8">
                {content}
            </main>
        </body>
        </html>"#,
        layout::escape(title),
        layout::nav_bar(active_nav)
    );

    Html(html)
}
