use indexmap::IndexMap;

use crate::error::Error;
use crate::parse::operation::{HttpMethod, MethodSpec};
use crate::parse::spec::SwaggerDocument;

/// Label of an output group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupLabel {
    /// The single group used when the document declares no tags.
    Default,
    Tag(String),
}

impl GroupLabel {
    /// Section title for this group. The default group takes the configured title.
    pub fn title<'a>(&'a self, default_title: &'a str) -> &'a str {
        match self {
            GroupLabel::Default => default_title,
            GroupLabel::Tag(name) => name,
        }
    }
}

/// One documented operation: a method under a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operation<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub spec: &'a MethodSpec,
}

/// Groups in output order.
pub type Groups<'a> = IndexMap<GroupLabel, Vec<Operation<'a>>>;

/// Partition every operation of the document into groups.
///
/// Without declared tags there is exactly one [`GroupLabel::Default`] group
/// holding every operation, whatever its own `tags` say. With declared tags,
/// an operation lands in each group it is tagged with (so it may appear more
/// than once) and untagged operations are dropped. Tags used by operations
/// but never declared open new groups after the declared ones.
pub fn group_operations(doc: &SwaggerDocument) -> Groups<'_> {
    let mut groups: Groups<'_> = doc
        .tags
        .iter()
        .map(|tag| (GroupLabel::Tag(tag.name.clone()), Vec::new()))
        .collect();

    let default_mode = groups.is_empty();
    if default_mode {
        groups.insert(GroupLabel::Default, Vec::new());
    }

    for (path, item) in &doc.paths {
        for (&method, spec) in &item.operations {
            let op = Operation { path, method, spec };
            if default_mode {
                groups.entry(GroupLabel::Default).or_default().push(op);
                continue;
            }
            if spec.tags.is_empty() {
                log::debug!("{} {} has no tags and is not documented", method, path);
            }
            for tag in &spec.tags {
                groups
                    .entry(GroupLabel::Tag(tag.clone()))
                    .or_default()
                    .push(op);
            }
        }
    }

    groups
}

/// Check a tag selection against the available groups.
///
/// Returns [`Error::InvalidTagSelection`] naming the first selected tag (in
/// selection order) that matches no group title.
pub fn check_tags(
    selected: &[String],
    groups: &Groups<'_>,
    default_title: &str,
    reference: &str,
) -> Option<Error> {
    selected
        .iter()
        .find(|tag| {
            !groups
                .keys()
                .any(|label| label.title(default_title) == tag.as_str())
        })
        .map(|tag| Error::InvalidTagSelection {
            tag: tag.clone(),
            reference: reference.to_string(),
        })
}
