//! In-memory storage for the templates of the registry.
//!
//! A [`Store`] is a cheap handle over a single shared mapping from template
//! name to its data. Every operation takes the guard exactly once, so a write
//! is either fully visible or not visible at all. The `templates_stored`
//! gauge is updated while the write guard is held.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Free form content of a template. Only its top level shape is enforced.
pub type TemplateData = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Template {
    pub name: String,
    pub data: TemplateData,
}

impl Template {
    pub fn new(name: impl Into<String>, data: TemplateData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("template name should not be empty")]
    EmptyName,
    #[error("template {0:?} not found")]
    NotFound(String),
}

#[derive(Clone, Debug, Default)]
pub struct Store(Arc<RwLock<HashMap<String, TemplateData>>>);

impl Store {
    /// Inserts the template, replacing any previous one with the same name.
    pub async fn upsert(&self, template: Template) -> Result<Template, Error> {
        if template.name.is_empty() {
            return Err(Error::EmptyName);
        }
        let mut inner = self.0.write().await;
        let previous = inner.insert(template.name.clone(), template.data.clone());
        metrics::gauge!("templates_stored").set(inner.len() as f64);
        tracing::debug!(
            name = %template.name,
            overwritten = previous.is_some(),
            "template stored"
        );
        Ok(template)
    }

    pub async fn list(&self) -> HashMap<String, TemplateData> {
        self.0.read().await.clone()
    }

    pub async fn find_by_name(&self, name: &str) -> Result<TemplateData, Error> {
        self.0
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_owned()))
    }

    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        let mut inner = self.0.write().await;
        match inner.remove(name) {
            Some(_) => {
                metrics::gauge!("templates_stored").set(inner.len() as f64);
                tracing::debug!(name, "template deleted");
                Ok(())
            }
            None => Err(Error::NotFound(name.to_owned())),
        }
    }

    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.0.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Store, Template, TemplateData};

    fn data(value: serde_json::Value) -> TemplateData {
        match value {
            serde_json::Value::Object(inner) => inner,
            other => panic!("expected an object, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_find_created_template() {
        let store = Store::default();
        let payload = data(serde_json::json!({
            "type": "scatter",
            "layout": { "title": "Revenue", "axes": [1, 2, 3] },
            "visible": true,
        }));
        let created = store
            .upsert(Template::new("revenue", payload.clone()))
            .await
            .unwrap();
        assert_eq!(created.name, "revenue");
        assert_eq!(created.data, payload);
        assert_eq!(store.find_by_name("revenue").await.unwrap(), payload);
    }

    #[tokio::test]
    async fn should_overwrite_existing_template() {
        let store = Store::default();
        store
            .upsert(Template::new("chart", data(serde_json::json!({ "type": "bar" }))))
            .await
            .unwrap();
        store
            .upsert(Template::new("chart", data(serde_json::json!({ "kind": "pie" }))))
            .await
            .unwrap();
        let found = store.find_by_name("chart").await.unwrap();
        assert_eq!(found, data(serde_json::json!({ "kind": "pie" })));
        assert!(!found.contains_key("type"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn should_accept_empty_data() {
        let store = Store::default();
        store
            .upsert(Template::new("blank", TemplateData::new()))
            .await
            .unwrap();
        assert!(store.find_by_name("blank").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_empty_name() {
        let store = Store::default();
        let err = store
            .upsert(Template::new("", TemplateData::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyName));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn should_fail_on_unknown_name() {
        let store = Store::default();
        let err = store.find_by_name("missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "missing"));
        let err = store.delete("missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "missing"));
    }

    #[tokio::test]
    async fn should_list_nothing_when_empty() {
        let store = Store::default();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn should_forget_deleted_template() {
        let store = Store::default();
        store
            .upsert(Template::new("chart1", data(serde_json::json!({ "type": "bar" }))))
            .await
            .unwrap();
        let list = store.list().await;
        assert_eq!(list.len(), 1);
        assert_eq!(list["chart1"], data(serde_json::json!({ "type": "bar" })));

        store.delete("chart1").await.unwrap();
        assert!(store.list().await.is_empty());
        assert!(matches!(
            store.find_by_name("chart1").await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_share_state_between_clones() {
        let store = Store::default();
        let other = store.clone();
        other
            .upsert(Template::new("shared", TemplateData::new()))
            .await
            .unwrap();
        assert!(store.find_by_name("shared").await.is_ok());
    }
}
