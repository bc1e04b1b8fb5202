use indexmap::IndexMap;

use crate::config::TableOptions;
use crate::nodes::{Inline, Node, Table};
use crate::parse::operation::{HttpMethod, MethodSpec};
use crate::parse::parameter::ParameterSpec;
use crate::parse::response::ResponseSpec;

const PARAMETER_HEAD: [&str; 5] = ["Name", "Position", "Description", "Type", "Notes"];
const RESPONSE_HEAD: [&str; 3] = ["Name", "Description", "Type"];

/// Layout options for method blocks.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub parameter_widths: Option<Vec<u32>>,
    pub response_widths: Option<Vec<u32>>,
}

impl From<&TableOptions> for BuildOptions {
    fn from(tables: &TableOptions) -> Self {
        Self {
            parameter_widths: tables.parameter_widths.clone(),
            response_widths: tables.response_widths.clone(),
        }
    }
}

/// Build the document block for one operation: title, summary, the
/// description/consumes/produces list, then parameter and response blocks
/// when the operation declares them.
pub fn build_method(
    path: &str,
    method: HttpMethod,
    spec: &MethodSpec,
    options: &BuildOptions,
) -> Node {
    let mut children = vec![
        Node::text(spec.summary.clone().unwrap_or_default()),
        Node::BulletList {
            items: overview_items(spec),
        },
    ];

    if let Some(ref parameters) = spec.parameters {
        children.extend(parameters_block(parameters, options));
    }

    if let Some(ref responses) = spec.responses {
        children.extend(responses_block(responses, options));
    }

    Node::Block {
        title: format!("{} {}", method.as_str(), path),
        children,
    }
}

fn overview_items(spec: &MethodSpec) -> Vec<Vec<Node>> {
    let fields = [
        ("Description", spec.description.clone()),
        ("Consumes", spec.consumes.as_ref().map(|v| v.join(", "))),
        ("Produces", spec.produces.as_ref().map(|v| v.join(", "))),
    ];

    fields
        .into_iter()
        .filter_map(|(label, value)| {
            value.map(|value| {
                vec![Node::paragraph(vec![
                    Inline::Strong(format!("{label}: ")),
                    Inline::Text(value),
                ])]
            })
        })
        .collect()
}

fn parameters_block(parameters: &[ParameterSpec], options: &BuildOptions) -> Vec<Node> {
    let body = parameters
        .iter()
        // A `body` parameter without schema `properties` (e.g. a `$ref` schema)
        // stays a single row rather than vanishing from the table.
        .flat_map(|param| {
            param
                .body_properties()
                .unwrap_or_else(|| vec![param.clone()])
        })
        .map(|param| parameter_row(&param))
        .collect();

    vec![
        Node::strong("Parameters"),
        Node::Table(Table::new(
            &PARAMETER_HEAD,
            body,
            options.parameter_widths.as_deref(),
        )),
    ]
}

fn parameter_row(param: &ParameterSpec) -> Vec<String> {
    vec![
        param.name.clone().unwrap_or_default(),
        param.location.clone().unwrap_or_default(),
        param.description.clone().unwrap_or_default(),
        param.type_name.clone().unwrap_or_default(),
        param.notes(),
    ]
}

fn responses_block(responses: &IndexMap<String, ResponseSpec>, options: &BuildOptions) -> Vec<Node> {
    let mut entries = vec![Node::strong("Responses")];

    for (name, response) in responses {
        entries.push(Node::emphasis(format!(
            "{} - {}",
            name,
            response.description.as_deref().unwrap_or_default()
        )));

        if let Some(properties) = response.properties() {
            let body = properties
                .iter()
                .map(|(prop_name, prop)| {
                    vec![
                        prop_name.clone(),
                        prop.description.clone().unwrap_or_default(),
                        prop.type_name.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            entries.push(Node::Table(Table::new(
                &RESPONSE_HEAD,
                body,
                options.response_widths.as_deref(),
            )));
        }
    }

    entries
}
