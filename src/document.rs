//! Document model standing in for the page the controller is bound to
//!
//! Element identifiers and attributes are fixed at construction time, the
//! way the markup fixes them; class name and text content stay mutable
//! because the status update rewrites them at runtime. Lookups return
//! `Option` so callers handle the "not found" branch explicitly.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A single element of the page
#[derive(Debug, Clone)]
pub struct Element {
    id: Option<String>,
    attributes: HashMap<String, String>,
    state: Arc<RwLock<ElementState>>,
}

#[derive(Debug, Default)]
struct ElementState {
    class_name: String,
    text_content: String,
}

impl Element {
    pub fn new() -> Self {
        Self {
            id: None,
            attributes: HashMap::new(),
            state: Arc::new(RwLock::new(ElementState::default())),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the initial class name. Only effective while building, before the
    /// element has been cloned into a document.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        if let Some(lock) = Arc::get_mut(&mut self.state) {
            lock.get_mut().class_name = class.into();
        }
        self
    }

    /// Set the initial text content. Only effective while building, before
    /// the element has been cloned into a document.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        if let Some(lock) = Arc::get_mut(&mut self.state) {
            lock.get_mut().text_content = text.into();
        }
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The element's `href` attribute, if any
    pub fn href(&self) -> Option<&str> {
        self.attribute("href")
    }

    pub async fn class_name(&self) -> String {
        self.state.read().await.class_name.clone()
    }

    pub async fn text_content(&self) -> String {
        self.state.read().await.text_content.clone()
    }

    pub async fn set_class_name(&self, class: impl Into<String>) {
        self.state.write().await.class_name = class.into();
    }

    pub async fn set_text_content(&self, text: impl Into<String>) {
        self.state.write().await.text_content = text.into();
    }

    /// Whether the class name contains the given class token
    pub async fn has_class(&self, class: &str) -> bool {
        self.state
            .read()
            .await
            .class_name
            .split_whitespace()
            .any(|token| token == class)
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Element {
    /// Node identity, not structural equality
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

/// An immutable collection of elements; clones share the same nodes
#[derive(Debug, Clone)]
pub struct Document {
    elements: Arc<Vec<Element>>,
}

impl Document {
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Look up an element by identifier
    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        self.elements
            .iter()
            .find(|element| element.id() == Some(id))
            .cloned()
    }

    /// Collect every element whose current class name contains the token
    pub async fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let mut matched = Vec::new();
        for element in self.elements.iter() {
            if element.has_class(class).await {
                matched.push(element.clone());
            }
        }
        matched
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Builder for assembling a document
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    elements: Vec<Element>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn build(self) -> Document {
        Document {
            elements: Arc::new(self.elements),
        }
    }
}
