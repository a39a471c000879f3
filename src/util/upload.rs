//! Image upload drop zone helpers.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// The parts of a picked file the preview cares about.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub size_bytes: f64,
    pub mime: String,
}

impl FileSummary {
    /// Only `image/*` files get a thumbnail.
    #[must_use]
    pub fn is_previewable(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// `photo.png (12.3KB)`
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} ({:.1}KB)", self.name, self.size_bytes / 1024.0)
    }
}

/// Drop zone affordance while something is dragged over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropHighlight {
    Idle,
    Hover,
}

impl DropHighlight {
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Hover => "rgba(0,212,255,0.08)",
        }
    }

    #[must_use]
    pub fn border_color(self) -> &'static str {
        match self {
            Self::Idle => "rgba(255,255,255,0.2)",
            Self::Hover => "rgba(0,212,255,0.3)",
        }
    }
}
