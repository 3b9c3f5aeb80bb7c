//! Share buttons: native share sheet when the platform has one, clipboard otherwise.

/// Notice shown after falling back to copying the link.
pub const COPIED_NOTICE: &str = "Länken har kopierats!";

/// What a share button shares, read from its `data-url` and `data-title` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    pub url: String,
    pub title: String,
}

impl ShareTarget {
    /// `None` when the button has no `data-url`; a missing title shares an empty one.
    pub fn from_attributes(url: Option<String>, title: Option<String>) -> Option<Self> {
        Some(Self {
            url: url?,
            title: title.unwrap_or_default(),
        })
    }
}

/// Platform capabilities the share action needs.
pub trait SharePlatform {
    fn can_share(&self) -> bool;
    fn share(&self, target: &ShareTarget);
    fn copy_to_clipboard(&self, text: &str);
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

pub fn share<P: SharePlatform + ?Sized>(platform: &P, target: &ShareTarget) -> ShareOutcome {
    if platform.can_share() {
        platform.share(target);
        ShareOutcome::Shared
    } else {
        platform.copy_to_clipboard(&target.url);
        platform.notify(COPIED_NOTICE);
        ShareOutcome::Copied
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        native: bool,
        shared: RefCell<Vec<ShareTarget>>,
        copied: RefCell<Vec<String>>,
        notices: RefCell<Vec<String>>,
    }

    impl SharePlatform for Recorder {
        fn can_share(&self) -> bool {
            self.native
        }

        fn share(&self, target: &ShareTarget) {
            self.shared.borrow_mut().push(target.clone());
        }

        fn copy_to_clipboard(&self, text: &str) {
            self.copied.borrow_mut().push(text.to_string());
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    fn target() -> ShareTarget {
        ShareTarget {
            url: "https://example.se/t/5/hej".into(),
            title: "Hej".into(),
        }
    }

    #[test]
    fn native_share_gets_url_and_title_only() {
        let platform = Recorder {
            native: true,
            ..Default::default()
        };

        assert_eq!(share(&platform, &target()), ShareOutcome::Shared);
        assert_eq!(*platform.shared.borrow(), [target()]);
        assert!(platform.copied.borrow().is_empty());
        assert!(platform.notices.borrow().is_empty());
    }

    #[test]
    fn fallback_copies_and_notifies_once() {
        let platform = Recorder::default();

        assert_eq!(share(&platform, &target()), ShareOutcome::Copied);
        assert!(platform.shared.borrow().is_empty());
        assert_eq!(*platform.copied.borrow(), ["https://example.se/t/5/hej"]);
        assert_eq!(platform.notices.borrow().len(), 1);
    }

    #[test]
    fn buttons_without_url_are_skipped() {
        assert_eq!(ShareTarget::from_attributes(None, Some("t".into())), None);
        assert_eq!(
            ShareTarget::from_attributes(Some("u".into()), None),
            Some(ShareTarget {
                url: "u".into(),
                title: String::new()
            })
        );
    }
}
