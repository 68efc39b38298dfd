use vibeaura_docs::models::{FeatureItem, FEATURES};

pub fn feature_list() -> Vec<FeatureItem> {
    FEATURES.to_vec()
}

/// Text of every h3 element in document order.
pub fn heading_texts(html: &str) -> Vec<String> {
    texts_between(html, "<h3", "</h3>")
}

/// Text of every p element in document order.
pub fn paragraph_texts(html: &str) -> Vec<String> {
    texts_between(html, "<p", "</p>")
}

/// Complete column elements in document order. Each fragment runs from the
/// column's opening `<div` to its balancing `</div>`, so fragments are
/// self-contained regardless of attribute order in the rendered tag.
pub fn column_fragments(html: &str) -> Vec<String> {
    let marker = "class=\"feature-col\"";
    let mut out = Vec::new();
    let mut search_from = 0;

    while let Some(found) = html[search_from..].find(marker) {
        let marker_at = search_from + found;
        let open = html[..marker_at].rfind("<div").expect("column opening tag");

        let mut depth = 0usize;
        let mut pos = open;
        let end = loop {
            let rest = &html[pos..];
            match (rest.find("<div"), rest.find("</div>")) {
                (Some(o), Some(c)) if o < c => {
                    depth += 1;
                    pos += o + "<div".len();
                }
                (_, Some(c)) => {
                    depth -= 1;
                    pos += c + "</div>".len();
                    if depth == 0 {
                        break pos;
                    }
                }
                _ => break html.len(),
            }
        };

        out.push(html[open..end].to_string());
        search_from = end;
    }

    out
}

fn texts_between(html: &str, open: &str, close: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(open) {
        let after = &rest[start..];
        let Some(gt) = after.find('>') else { break };
        let body = &after[gt + 1..];
        let Some(end) = body.find(close) else { break };
        out.push(clean_text(&body[..end]));
        rest = &body[end + close.len()..];
    }

    out
}

/// Strips comment markers the renderer may interleave with text nodes.
fn clean_text(s: &str) -> String {
    let mut out = String::new();
    let mut rest = s;

    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(offset) => rest = &rest[start + offset + 3..],
            None => {
                rest = "";
                break;
            }
        }
    }

    out.push_str(rest);
    out.replace("<!>", "")
}
