//! HTML sidebar fragment.
//!
//! A preview of the navigation as plain HTML, for checking the tree in a
//! browser without running the site framework. Folders are `<details>`
//! elements, open unless collapsed, so the fragment needs no JavaScript.

use crate::types::NavNode;
use maud::{Markup, html};

/// Renders the sidebar as a nested list.
pub fn render_sidebar(nodes: &[NavNode]) -> Markup {
    html! {
        nav.sidebar {
            ul {
                @for node in nodes {
                    (render_node(node))
                }
            }
        }
    }
}

fn render_node(node: &NavNode) -> Markup {
    match node {
        NavNode::Folder {
            label,
            collapsed,
            children,
        } => html! {
            li.nav-folder {
                details open[!*collapsed] {
                    summary { (label) }
                    ul {
                        @for child in children {
                            (render_node(child))
                        }
                    }
                }
            }
        },
        NavNode::Document { label, link } => html! {
            li.nav-document {
                a href=(link) { (label) }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_documents_as_links() {
        let html =
            render_sidebar(&[NavNode::document("Человек", "/content/Расы/Человек")]).into_string();
        assert!(html.contains(r#"<a href="/content/Расы/Человек">Человек</a>"#));
        assert!(html.contains(r#"<nav class="sidebar">"#));
    }

    #[test]
    fn expanded_folder_is_open() {
        let nodes = [NavNode::folder(
            "Расы",
            false,
            vec![NavNode::document("Человек", "/content/Расы/Человек")],
        )];
        let html = render_sidebar(&nodes).into_string();
        assert!(html.contains("<details open>"));
        assert!(html.contains("<summary>Расы</summary>"));
    }

    #[test]
    fn collapsed_folder_is_closed() {
        let nodes = [NavNode::folder(
            "Инопланетяне",
            true,
            vec![NavNode::document("Вуки", "/content/Расы/Инопланетяне/Вуки")],
        )];
        let html = render_sidebar(&nodes).into_string();
        assert!(html.contains("<details>"));
        assert!(!html.contains("open"));
    }

    #[test]
    fn nested_children_rendered() {
        let nodes = [NavNode::folder(
            "Расы",
            false,
            vec![NavNode::folder(
                "Инопланетяне",
                true,
                vec![NavNode::document("Вуки", "/content/Расы/Инопланетяне/Вуки")],
            )],
        )];
        let html = render_sidebar(&nodes).into_string();
        assert!(html.contains("Инопланетяне"));
        assert!(html.contains("/content/Расы/Инопланетяне/Вуки"));
        assert_eq!(html.matches("nav-folder").count(), 2);
    }

    #[test]
    fn labels_are_escaped() {
        let html = render_sidebar(&[NavNode::document("<b>Ситх</b>", "/x")]).into_string();
        assert!(html.contains("&lt;b&gt;Ситх&lt;/b&gt;"));
    }
}
