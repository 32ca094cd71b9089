//! Static profile content types.

/// One labeled row of the biodata table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BiodataField {
    pub label: &'static str,
    pub value: &'static str,
}

impl BiodataField {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// A titled group of biodata rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BiodataCategory {
    pub title: &'static str,
    /// Emoji shown next to the title.
    pub icon: &'static str,
    pub fields: &'static [BiodataField],
}

/// How a footer contact link is opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Web,
}

/// A footer contact link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub target: &'static str,
    pub kind: ContactKind,
}

impl ContactLink {
    /// The `href` for this link (`mailto:`/`tel:` prefixed where needed).
    pub fn href(&self) -> String {
        match self.kind {
            ContactKind::Email => format!("mailto:{}", self.target),
            ContactKind::Phone => {
                let digits: String = self
                    .target
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                format!("tel:{}", digits)
            }
            ContactKind::Web => self.target.to_string(),
        }
    }

    /// Web links leave the page; the others hand off to the OS.
    pub fn opens_new_tab(&self) -> bool {
        self.kind == ContactKind::Web
    }
}
