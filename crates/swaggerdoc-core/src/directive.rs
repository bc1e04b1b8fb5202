//! The `swaggerv2doc` directive: fetch a document, group its operations and
//! build one section per selected group.

use std::error::Error as _;
use std::path::PathBuf;

use crate::config::SwaggerDocConfig;
use crate::error::Error;
use crate::fetch::{fetch, source_path};
use crate::nodes::Node;
use crate::parse;
use crate::transform::{BuildOptions, build_method, check_tags, group_operations};

/// Directive content: the document reference followed by the tags to include.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveContent {
    pub reference: String,
    /// Empty means every group.
    pub selected_tags: Vec<String>,
}

impl DirectiveContent {
    pub fn new(reference: impl Into<String>, selected_tags: Vec<String>) -> Self {
        Self {
            reference: reference.into(),
            selected_tags,
        }
    }

    /// Parse a content block: the first non-blank line is the reference, every
    /// following non-blank line a tag name.
    pub fn parse(block: &str) -> Result<Self, String> {
        let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
        let reference = lines
            .next()
            .ok_or_else(|| "directive content is empty; expected a Swagger URL or path".to_string())?;
        Ok(Self::new(reference, lines.map(str::to_string).collect()))
    }
}

/// Everything a directive run hands back to the host.
#[derive(Debug, Clone, Default)]
pub struct DirectiveOutput {
    pub nodes: Vec<Node>,
    /// Non-fatal problems to surface through the host's diagnostic channel.
    pub diagnostics: Vec<String>,
    /// Local files read, for incremental rebuild tracking.
    pub dependencies: Vec<PathBuf>,
}

impl DirectiveOutput {
    /// Whether the run failed and produced the error node instead of sections.
    pub fn is_error(&self) -> bool {
        self.nodes.first().is_some_and(Node::is_error)
    }
}

/// Runs the directive against a configuration.
#[derive(Debug, Clone, Default)]
pub struct SwaggerDirective {
    config: SwaggerDocConfig,
}

impl SwaggerDirective {
    pub fn new(config: SwaggerDocConfig) -> Self {
        Self { config }
    }

    /// Run the directive. Never fails: any fetch or build error discards the
    /// whole output and yields a single error node; the cause goes to the log.
    pub fn run(&self, content: &DirectiveContent) -> DirectiveOutput {
        let mut output = DirectiveOutput::default();
        match self.try_run(content, &mut output) {
            Ok(nodes) => output.nodes = nodes,
            Err(err) => {
                log_failure(&content.reference, &err);
                output.nodes = vec![error_node(&content.reference)];
            }
        }
        output
    }

    fn try_run(
        &self,
        content: &DirectiveContent,
        output: &mut DirectiveOutput,
    ) -> Result<Vec<Node>, Error> {
        // Recorded before reading so a broken file still triggers a rebuild.
        output
            .dependencies
            .extend(source_path(&content.reference, &self.config.doc_root));
        let value = fetch(&content.reference, &self.config.doc_root)?;

        let doc = parse::from_value(value)?;
        let groups = group_operations(&doc);
        let default_title = self.config.default_group_title.as_str();

        // Reported, not fatal: whatever matches is still rendered.
        if let Some(err) = check_tags(
            &content.selected_tags,
            &groups,
            default_title,
            &content.reference,
        ) {
            log::warn!("{err}");
            output.diagnostics.push(err.to_string());
        }

        let options = BuildOptions::from(&self.config.tables);
        let sections = groups
            .iter()
            .filter(|(label, _)| {
                content.selected_tags.is_empty()
                    || content
                        .selected_tags
                        .iter()
                        .any(|t| t == label.title(default_title))
            })
            .map(|(label, operations)| {
                let blocks = operations
                    .iter()
                    .map(|op| build_method(op.path, op.method, op.spec, &options))
                    .collect();
                Node::section(label.title(default_title), blocks)
            })
            .collect();

        Ok(sections)
    }
}

fn log_failure(reference: &str, err: &Error) {
    log::error!("Unable to process URL: {reference}");
    log::error!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        log::error!("  caused by: {cause}");
        source = cause.source();
    }
}

fn error_node(reference: &str) -> Node {
    Node::Error {
        children: vec![
            Node::text(format!(
                "Unable to process URL: {reference}. Please check that the URL is a valid \
                 Swagger api-docs URL and it is accessible"
            )),
            Node::strong("Processing error. See console output for a more detailed error"),
        ],
    }
}
