//! Share-or-copy cascade for the current spot's link.
//!
//! Three mechanisms are tried in order: the native share sheet, the
//! asynchronous clipboard API, and the legacy selection-and-copy trick.
//! Absent mechanisms are skipped by asking the [`ShareTarget`] up front;
//! failures fall through to the next one.

use crate::catalog::Spot;
use crate::toast;

/// Payload for the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Share sheet title.
    pub title: String,
    /// Share sheet body text.
    pub text: String,
    /// Absolute link to the spot's video.
    pub url: String,
}

impl ShareRequest {
    /// Build the request for `spot`.
    ///
    /// `resolved_url` is the absolute form of the spot's media path; when
    /// resolution failed the relative path is shared instead.
    #[must_use]
    pub fn for_spot(spot: &Spot, resolved_url: Option<String>, title_prefix: &str) -> Self {
        Self {
            title: format!("{title_prefix} · {}", spot.title),
            text: spot.desc.clone(),
            url: resolved_url.unwrap_or_else(|| spot.file.clone()),
        }
    }
}

/// Why a share or copy attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// The mechanism does not exist in this environment.
    #[error("share mechanism unavailable")]
    Unavailable,

    /// The user closed the share sheet without picking a target.
    #[error("share dismissed by the user")]
    Dismissed,

    /// The mechanism failed (permission denied, unsupported data, ...).
    #[error("share failed: {0}")]
    Failed(String),
}

/// How the cascade ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareOutcome {
    /// The native share sheet completed.
    Shared,
    /// The user dismissed the native share sheet.
    Dismissed,
    /// The link was written with the clipboard API.
    Copied,
    /// The link was copied with the legacy text-field fallback.
    LegacyCopied,
    /// Nothing worked.
    Failed,
}

impl ShareOutcome {
    /// Toast to show for this outcome, if any.
    #[must_use]
    pub const fn toast(self) -> Option<&'static str> {
        match self {
            Self::Shared => Some(toast::SHARED),
            Self::Copied | Self::LegacyCopied => Some(toast::COPIED),
            Self::Failed => Some(toast::COPY_FAILED),
            Self::Dismissed => None,
        }
    }
}

/// The sharing and copying capabilities of the environment.
///
/// WASM is single-threaded, so the futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait ShareTarget {
    /// Whether a native share sheet is available.
    fn can_share(&self) -> bool;

    /// Open the native share sheet.
    ///
    /// # Errors
    ///
    /// [`ShareError::Dismissed`] if the user cancelled, otherwise
    /// [`ShareError::Failed`].
    async fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;

    /// Whether the asynchronous clipboard API is available.
    fn has_clipboard(&self) -> bool;

    /// Write `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// [`ShareError::Failed`] if the write was rejected.
    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError>;

    /// Copy `text` through a temporary selected text field.
    ///
    /// # Errors
    ///
    /// [`ShareError::Failed`] if the copy command was refused.
    fn legacy_copy(&self, text: &str) -> Result<(), ShareError>;
}

/// Share `request`, falling back to copying its URL.
///
/// A dismissed share sheet ends the cascade without copying: the user
/// already saw the sheet and chose not to share.
#[allow(clippy::future_not_send)] // WASM is single-threaded; targets are !Send
pub async fn share_or_copy<T>(target: &T, request: &ShareRequest) -> ShareOutcome
where
    T: ShareTarget + ?Sized,
{
    if target.can_share() {
        match target.share(request).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(ShareError::Dismissed) => return ShareOutcome::Dismissed,
            Err(e) => log::debug!("native share failed, trying clipboard: {e}"),
        }
    }

    if target.has_clipboard() {
        match target.write_clipboard(&request.url).await {
            Ok(()) => return ShareOutcome::Copied,
            Err(e) => log::debug!("clipboard write failed, trying legacy copy: {e}"),
        }
    }

    match target.legacy_copy(&request.url) {
        Ok(()) => ShareOutcome::LegacyCopied,
        Err(e) => {
            log::debug!("legacy copy failed: {e}");
            ShareOutcome::Failed
        }
    }
}
