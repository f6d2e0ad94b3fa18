use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use crate::highlight::highlight;

pub static GLOBAL_SNIPPET_CACHE: LazyLock<DashMap<String, Option<Snippet>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "snippets"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

/// A project code sample, pre-rendered to highlighted HTML on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub name: String,
    pub html: String,
}

#[derive(Error, Debug, Clone)]
pub enum SnippetError {
    #[error("Code snippet not found")]
    NotFound,
    #[error("Couldn't highlight code snippet")]
    HighlightError,
}

/// Language token for the highlighter, taken from the file extension.
pub fn snippet_lang(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("txt")
}

#[cfg(feature = "ssr")]
pub async fn get_snippet(name: String) -> Option<Snippet> {
    let content = Assets::get(&name)?;

    let cache = &*GLOBAL_SNIPPET_CACHE;
    cache
        .entry(name.clone())
        .or_insert_with(move || {
            let code =
                String::from_utf8(content.data.into()).expect("Couldn't parse code snippet");
            let html = highlight(snippet_lang(&name), &code)?;
            Some(Snippet { name, html })
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_from_extension() {
        assert_eq!(snippet_lang("bioprid.py"), "py");
        assert_eq!(snippet_lang("demo.tar.gz"), "gz");
        assert_eq!(snippet_lang("no-extension"), "txt");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_all_project_snippets_are_embedded() {
        for project in crate::content::PROJECTS {
            assert!(
                Assets::get(project.snippet).is_some(),
                "missing snippet file {}",
                project.snippet
            );
        }
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_get_snippet_renders_html() {
        let snippet = get_snippet("bioprid.py".to_string())
            .await
            .expect("snippet should resolve");
        assert_eq!(snippet.name, "bioprid.py");
        assert!(snippet.html.contains("<pre"));
        assert!(snippet.html.contains("train_dti_model"));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_get_snippet_missing_file() {
        assert!(get_snippet("nope.py".to_string()).await.is_none());
    }
}
