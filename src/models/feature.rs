/// A graphic handle resolved at construction time. Rendering never looks an
/// icon up by name; the asset path is bound here once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    pub src: &'static str,
    pub alt: &'static str,
}

/// One homepage feature card: title, resolved icon, description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

impl FeatureItem {
    /// Stable identifier derived from the title. Used as the rendered
    /// column's element id so identity survives reordering.
    pub fn slug(&self) -> String {
        slugify(self.title)
    }
}

/// Lowercases and replaces runs of non-alphanumeric characters with a single
/// dash. Leading and trailing dashes are stripped.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}

/// The homepage feature list. Order is rendering order.
pub const FEATURES: [FeatureItem; 3] = [
    FeatureItem {
        title: "Modular Agentic Runtimes",
        icon: Icon {
            src: "/static/img/feature-runtimes.svg",
            alt: "Stacked runtime layers",
        },
        description: "Switch between the artisan Vibe Agent and the powerhouse \
                      Copilot SDK native engine on the fly.",
    },
    FeatureItem {
        title: "System-Intimate Tooling",
        icon: Icon {
            src: "/static/img/feature-tooling.svg",
            alt: "Wrench over a terminal window",
        },
        description: "Deep access to your filesystem, system resources, and Git \
                      state for autonomous engineering that actually works.",
    },
    FeatureItem {
        title: "Directory-Aware Sessions",
        icon: Icon {
            src: "/static/img/feature-sessions.svg",
            alt: "Folder with an isolation ring",
        },
        description: "Project isolation is built-in. Sessions are keyed to your \
                      directory hash, ensuring your projects stay clean and \
                      separated.",
    },
];
