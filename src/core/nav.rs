use super::rotation::Face;

/// Screen corner holding one navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// DOM element id of the anchor in this corner.
    #[inline]
    pub fn element_id(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

impl Face {
    /// Corner whose link belongs to this face.
    #[inline]
    pub fn corner(self) -> Corner {
        match self {
            Face::Right | Face::Left => Corner::TopLeft,
            Face::Top => Corner::TopRight,
            Face::Front => Corner::BottomLeft,
            Face::Back | Face::Bottom => Corner::BottomRight,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub corner: Corner,
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(corner: Corner, label: &str, href: &str) -> Self {
        Self {
            corner,
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new(Corner::TopLeft, "About", "about.html"),
        NavLink::new(Corner::TopRight, "Blog", "https://x.com/brandonl_off"),
        NavLink::new(Corner::BottomLeft, "Projects", "project.html"),
        NavLink::new(Corner::BottomRight, "Contact", "contact.html"),
    ]
}

/// Which face, if any, drives link highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightPolicy {
    /// All links stay visible; the highlighter is never told about a face.
    Static,
    CurrentFace,
    UpcomingFace,
}

impl HighlightPolicy {
    #[inline]
    pub fn select(self, current: Face, upcoming: Face) -> Option<Face> {
        match self {
            HighlightPolicy::Static => None,
            HighlightPolicy::CurrentFace => Some(current),
            HighlightPolicy::UpcomingFace => Some(upcoming),
        }
    }
}

/// Display state of one corner link.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkState<'a> {
    pub link: &'a NavLink,
    pub visible: bool,
}

/// Visibility of every link for a highlighted face; `None` shows them all.
pub fn link_states(links: &[NavLink], face: Option<Face>) -> Vec<LinkState<'_>> {
    links
        .iter()
        .map(|link| LinkState {
            link,
            visible: face.map_or(true, |f| f.corner() == link.corner),
        })
        .collect()
}

/// Receives the highlighted face every frame.
pub trait LinkHighlighter {
    fn highlight(&mut self, face: Option<Face>);
}

/// Highlighter for pages whose links never change.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHighlighter;

impl LinkHighlighter for NoopHighlighter {
    fn highlight(&mut self, _face: Option<Face>) {}
}
