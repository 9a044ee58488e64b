use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::types::DemoKind;

/// Rules deciding the demo slot of catalog entries that don't name one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRules {
    /// Category whose projects embed a third-party applet.
    #[serde(default = "default_embedded_category")]
    pub embedded_category: String,
    /// Category of concept designs with nothing runnable.
    #[serde(default = "default_concept_category")]
    pub concept_category: String,
    /// Project ids that show the inline to-do list.
    #[serde(default = "default_list_widget_ids")]
    pub list_widget_ids: Vec<u32>,
    /// Project id (as a string key) to embed provider id.
    #[serde(default = "default_embeds")]
    pub embeds: BTreeMap<String, String>,
    /// Provider URL; `{id}` is replaced with the external id.
    #[serde(default = "default_embed_url_template")]
    pub embed_url_template: String,
}

fn default_embedded_category() -> String {
    "Scratch Game".to_string()
}

fn default_concept_category() -> String {
    "Business Application".to_string()
}

fn default_list_widget_ids() -> Vec<u32> {
    vec![4]
}

fn default_embeds() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("1".to_string(), "1206780689".to_string()),
        ("2".to_string(), "1208299987".to_string()),
    ])
}

fn default_embed_url_template() -> String {
    "https://scratch.mit.edu/projects/{id}/embed".to_string()
}

impl Default for DemoRules {
    fn default() -> Self {
        Self {
            embedded_category: default_embedded_category(),
            concept_category: default_concept_category(),
            list_widget_ids: default_list_widget_ids(),
            embeds: default_embeds(),
            embed_url_template: default_embed_url_template(),
        }
    }
}

impl DemoRules {
    /// Resolve the demo slot for a project without an explicit one.
    ///
    /// The embedded category is checked before the list-widget ids, then the
    /// concept category. Anything else is [`DemoKind::OnRequest`].
    pub fn resolve(&self, id: u32, category: &str) -> DemoKind {
        if category == self.embedded_category {
            DemoKind::Embedded {
                external_id: self.embeds.get(&id.to_string()).cloned(),
            }
        } else if self.list_widget_ids.contains(&id) {
            DemoKind::ListWidget
        } else if category == self.concept_category {
            DemoKind::ConceptOnly
        } else {
            DemoKind::default()
        }
    }

    /// Provider URL for an external id.
    pub fn embed_url(&self, external_id: &str) -> String {
        self.embed_url_template.replace("{id}", external_id)
    }
}
