use std::fmt;

/// Value of a DOT attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeValue {
    /// Rendered as a quoted, escaped string
    Quoted(String),
    /// Rendered verbatim inside `<` `>` (HTML-like label)
    Html(String),
}

/// Ordered list of DOT attributes, rendered as `[key="value",...]`.
///
/// Setting a key twice replaces the earlier value in place, so the output
/// order is the order in which keys were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBuilder {
    attributes: Vec<(&'static str, AttributeValue)>,
}

impl AttributeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html_label(mut self, value: impl Into<String>) -> Self {
        self.set("label", AttributeValue::Html(value.into()));
        self
    }

    pub fn shape(self, value: &str) -> Self {
        self.add("shape", Some(value.to_string()))
    }

    pub fn sides(self, value: Option<u32>) -> Self {
        self.add("sides", value.map(|v| v.to_string()))
    }

    pub fn style(self, value: Option<&str>) -> Self {
        self.add("style", value.map(str::to_string))
    }

    pub fn color(self, value: Option<&str>) -> Self {
        self.add("color", value.map(str::to_string))
    }

    pub fn fill_color(self, value: Option<&str>) -> Self {
        self.add("fillcolor", value.map(str::to_string))
    }

    pub fn font_name(self, value: Option<&str>) -> Self {
        self.add("fontname", value.map(str::to_string))
    }

    pub fn font_size(self, value: Option<u32>) -> Self {
        self.add("fontsize", value.map(|v| v.to_string()))
    }

    pub fn font_color(self, value: Option<&str>) -> Self {
        self.add("fontcolor", value.map(str::to_string))
    }

    /// Adds a quoted attribute; `None` leaves the list unchanged.
    pub fn add(mut self, key: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.set(key, AttributeValue::Quoted(value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| match v {
                AttributeValue::Quoted(s) | AttributeValue::Html(s) => s.as_str(),
            })
    }

    fn set(&mut self, key: &'static str, value: AttributeValue) {
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }
}

impl fmt::Display for AttributeBuilder {
    /// Empty builders render as an empty string, not `[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attributes.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, (key, value)) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match value {
                AttributeValue::Quoted(v) => write!(f, "{}=\"{}\"", key, escape_quoted(v))?,
                AttributeValue::Html(v) => write!(f, "{key}=<{v}>")?,
            }
        }
        f.write_str("]")
    }
}

/// Escape special characters for quoted DOT strings.
pub fn escape_quoted(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Escape text placed inside an HTML-like label.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
