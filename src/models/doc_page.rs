use crate::common::errors::DocsError;

/// One static documentation page, addressed by slug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub body_html: &'static str,
}

impl DocPage {
    pub fn by_slug(slug: &str) -> Result<&'static DocPage, DocsError> {
        DOC_PAGES
            .iter()
            .find(|page| page.slug == slug)
            .ok_or_else(|| DocsError::UnknownPage(slug.to_string()))
    }
}

pub const DOC_PAGES: [DocPage; 3] = [
    DocPage {
        slug: "getting-started",
        title: "Getting Started",
        summary: "Install vibeaura and run your first session.",
        body_html: r#"<p>vibeauracle is a keyboard-centric interface that unifies the terminal,
the IDE, and the AI assistant into a single system-aware experience.</p>
<p>Install the <code>vibeaura</code> binary, then start it from any project
directory:</p>
<pre><code>$ vibeaura</code></pre>
<p>The first run walks you through authentication and drops you into an
interactive session scoped to the current directory.</p>"#,
    },
    DocPage {
        slug: "agentic-runtimes",
        title: "Agentic Runtimes",
        summary: "The Vibe Agent and the Copilot SDK native engine.",
        body_html: r#"<p>Two engines share one interface. The <strong>Vibe Agent</strong> is the
artisan runtime: a hand-tuned loop over your local tools. The
<strong>Copilot SDK native engine</strong> delegates the loop to the SDK for
maximum throughput.</p>
<p>Switch engines at any time without losing your session:</p>
<pre><code>/engine vibe
/engine copilot-sdk</code></pre>"#,
    },
    DocPage {
        slug: "directory-sessions",
        title: "Directory-Aware Sessions",
        summary: "How sessions are keyed to your project directory.",
        body_html: r#"<p>Every session is keyed to a hash of the directory it was started in.
Conversations, context, and tool state never leak between projects.</p>
<p>Returning to a directory resumes its most recent session automatically;
<code>vibeaura --fresh</code> starts a clean one.</p>"#,
    },
];
