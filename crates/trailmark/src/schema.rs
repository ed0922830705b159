//! [schema.org](https://schema.org/BreadcrumbList) JSON-LD for breadcrumb trails.

use serde::Serialize;

use crate::breadcrumbs::Trail;

pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// A `BreadcrumbList` JSON-LD object.
#[derive(Debug, PartialEq, Serialize)]
pub struct BreadcrumbList<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem<'a>>,
}

/// A `ListItem` within a [`BreadcrumbList`].
#[derive(Debug, PartialEq, Serialize)]
pub struct ListItem<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<&'a str>,
}

impl<'a> BreadcrumbList<'a> {
    pub fn from_trail(trail: &'a Trail) -> Self {
        Self {
            context: SCHEMA_ORG_CONTEXT,
            kind: "BreadcrumbList",
            item_list_element: trail
                .iter()
                .map(|entry| ListItem {
                    kind: "ListItem",
                    position: entry.position,
                    name: &entry.name,
                    item: entry.link.as_ref().map(|link| link.as_str()),
                })
                .collect(),
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::breadcrumbs::BreadcrumbTrailBuilder;
    use crate::content::{ItemId, TermId};
    use crate::fixtures::*;
    use crate::store::ContentStore;

    fn make_trail() -> crate::breadcrumbs::Trail {
        let mut repository = make_repository();
        repository.add_term(make_term(1, "category", "Guides", None));
        repository.add_item(make_item(10, "article", None, "Getting Started"));
        repository.assign_terms(ItemId(10), "category", [TermId(1)]);

        let item = repository.item_by_id(ItemId(10)).unwrap();
        BreadcrumbTrailBuilder::new(&repository).build(&item)
    }

    #[test]
    fn test_breadcrumb_list_json_ld() {
        let trail = make_trail();

        insta::assert_json_snapshot!(trail.to_json_ld(), @r###"
        {
          "@context": "https://schema.org",
          "@type": "BreadcrumbList",
          "itemListElement": [
            {
              "@type": "ListItem",
              "position": 1,
              "name": "Home",
              "item": "https://example.com/"
            },
            {
              "@type": "ListItem",
              "position": 2,
              "name": "Guides",
              "item": "https://example.com/category/guides/"
            },
            {
              "@type": "ListItem",
              "position": 3,
              "name": "Getting Started"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_current_item_has_no_link() {
        let trail = make_trail();

        let value: serde_json::Value =
            serde_json::from_str(&trail.to_json_ld().to_json_string().unwrap()).unwrap();

        assert_eq!(
            value["itemListElement"][2],
            json!({
                "@type": "ListItem",
                "position": 3,
                "name": "Getting Started"
            })
        );
    }
}
