//! Share links for the story page.

use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    LinkedIn,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::Facebook, ShareTarget::Twitter, ShareTarget::LinkedIn];

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Facebook => "Share on Facebook",
            ShareTarget::Twitter => "Share on Twitter",
            ShareTarget::LinkedIn => "Share on LinkedIn",
        }
    }

    /// Sharer URL for `page_url` with `text` as the accompanying description.
    pub fn url(self, page_url: &str, text: &str) -> String {
        let page_url = urlencoding::encode(page_url);
        let text = urlencoding::encode(text);
        match self {
            ShareTarget::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                page_url, text
            ),
            ShareTarget::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                text, page_url
            ),
            ShareTarget::LinkedIn => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                page_url
            ),
        }
    }
}

pub fn share_text(title: &str) -> String {
    format!("Check out my personalized story: {}", title)
}

/// Address of the page currently shown.
pub fn current_page_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Open a sharer in a small popup window.
pub fn open_share_window(target: ShareTarget, page_url: &str, title: &str) {
    let url = target.url(page_url, &share_text(title));
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target_and_features(&url, "_blank", "width=600,height=400") {
            log::warn!("Failed to open share window: {:?}", e);
        }
    }
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window available")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to copy link: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://ninte-kadha.app/book?lang=ml";

    #[test]
    fn test_share_text() {
        assert_eq!(
            share_text("Your Digital Journey"),
            "Check out my personalized story: Your Digital Journey"
        );
    }

    #[test]
    fn test_facebook_url() {
        assert_eq!(
            ShareTarget::Facebook.url(PAGE, "My story"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fninte-kadha.app%2Fbook%3Flang%3Dml&quote=My%20story"
        );
    }

    #[test]
    fn test_twitter_url() {
        assert_eq!(
            ShareTarget::Twitter.url(PAGE, "My story"),
            "https://twitter.com/intent/tweet?text=My%20story&url=https%3A%2F%2Fninte-kadha.app%2Fbook%3Flang%3Dml"
        );
    }

    #[test]
    fn test_linkedin_url_ignores_text() {
        assert_eq!(
            ShareTarget::LinkedIn.url(PAGE, "ignored"),
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fninte-kadha.app%2Fbook%3Flang%3Dml"
        );
    }
}
