use std::fs;
use std::path::PathBuf;

use swaggerdoc_core::config::SwaggerDocConfig;
use swaggerdoc_core::{DirectiveContent, Node, SwaggerDirective, Table};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn directive() -> SwaggerDirective {
    SwaggerDirective::new(SwaggerDocConfig {
        doc_root: fixtures_dir(),
        ..SwaggerDocConfig::default()
    })
}

fn run(block: &str) -> swaggerdoc_core::DirectiveOutput {
    directive().run(&DirectiveContent::parse(block).unwrap())
}

fn titles(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().filter_map(Node::title).collect()
}

fn find_block<'a>(sections: &'a [Node], title: &str) -> &'a Node {
    sections
        .iter()
        .flat_map(Node::children)
        .find(|n| n.title() == Some(title))
        .unwrap_or_else(|| panic!("no block titled {title}"))
}

fn tables(block: &Node) -> Vec<&Table> {
    block
        .children()
        .iter()
        .filter_map(|n| match n {
            Node::Table(t) => Some(t),
            _ => None,
        })
        .collect()
}

#[test]
fn minimal_document_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("pets.json"),
        r#"{"paths": {"/pets": {"get": {"summary": "List pets", "responses": {"200": {"description": "ok"}}}}}}"#,
    )
    .unwrap();
    let directive = SwaggerDirective::new(SwaggerDocConfig {
        doc_root: dir.path().to_path_buf(),
        ..SwaggerDocConfig::default()
    });

    let output = directive.run(&DirectiveContent::new("pets.json", vec![]));

    assert!(!output.is_error());
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.dependencies, vec![dir.path().join("pets.json")]);
    assert_eq!(output.nodes.len(), 1);

    let section = &output.nodes[0];
    assert_eq!(section.title(), Some(""));
    assert_eq!(section.children().len(), 1);

    let block = &section.children()[0];
    assert_eq!(block.title(), Some("GET /pets"));
    assert_eq!(
        block.children(),
        &[
            Node::text("List pets"),
            Node::BulletList { items: vec![] },
            Node::strong("Responses"),
            Node::emphasis("200 - ok"),
        ]
    );
}

#[test]
fn nonexistent_file_yields_error_node() {
    let output = run("does-not-exist.json");

    assert!(output.is_error());
    assert_eq!(output.nodes.len(), 1);
    assert!(output.nodes[0].plain_text().contains("does-not-exist.json"));
    assert_eq!(
        output.dependencies,
        vec![fixtures_dir().join("does-not-exist.json")]
    );
}

#[test]
fn unparseable_file_is_still_a_dependency() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    let directive = SwaggerDirective::new(SwaggerDocConfig {
        doc_root: dir.path().to_path_buf(),
        ..SwaggerDocConfig::default()
    });

    let output = directive.run(&DirectiveContent::new("broken.json", vec![]));

    assert!(output.is_error());
    assert_eq!(output.dependencies, vec![dir.path().join("broken.json")]);
}

#[test]
fn missing_paths_discards_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("nopaths.json"), r#"{"swagger": "2.0"}"#).unwrap();
    let directive = SwaggerDirective::new(SwaggerDocConfig {
        doc_root: dir.path().to_path_buf(),
        ..SwaggerDocConfig::default()
    });

    let output = directive.run(&DirectiveContent::new("nopaths.json", vec![]));

    assert!(output.is_error());
    assert_eq!(output.nodes.len(), 1);
    assert_eq!(output.dependencies, vec![dir.path().join("nopaths.json")]);
}

#[test]
fn malformed_method_discards_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("bad.json"),
        r#"{"paths": {"/ok": {"get": {"summary": "fine"}}, "/bad": {"get": {"parameters": "oops"}}}}"#,
    )
    .unwrap();
    let directive = SwaggerDirective::new(SwaggerDocConfig {
        doc_root: dir.path().to_path_buf(),
        ..SwaggerDocConfig::default()
    });

    let output = directive.run(&DirectiveContent::new("bad.json", vec![]));

    assert!(output.is_error());
    assert_eq!(output.nodes.len(), 1);
}

#[test]
fn petstore_groups_by_declared_tags() {
    let output = run("petstore-v2.json");

    assert!(!output.is_error());
    assert_eq!(titles(&output.nodes), vec!["pet", "store", "user"]);

    let pet = &output.nodes[0];
    assert_eq!(
        titles(pet.children()),
        vec!["POST /pet", "PUT /pet", "GET /pet/{petId}", "POST /store/order"]
    );

    let store = &output.nodes[1];
    assert_eq!(
        titles(store.children()),
        vec!["GET /store/inventory", "POST /store/order"]
    );

    assert!(output.nodes[2].children().is_empty());

    let all_blocks: Vec<&str> = output
        .nodes
        .iter()
        .flat_map(|s| titles(s.children()))
        .collect();
    assert!(!all_blocks.contains(&"GET /health"));
}

#[test]
fn body_schema_properties_expand_to_rows() {
    let output = run("petstore-v2.json");
    let block = find_block(&output.nodes, "POST /pet");

    let params = tables(block)[0];
    assert_eq!(params.body.len(), 3);
    assert!(params.body.iter().all(|row| row[1] == "body"));
    assert_eq!(params.body[1], vec!["name", "body", "", "string", "example: doggie"]);
    assert_eq!(params.body[2][2], "pet status in the store");
}

#[test]
fn body_without_properties_is_one_row() {
    let output = run("petstore-v2.json");
    let block = find_block(&output.nodes, "PUT /pet");

    let params = tables(block)[0];
    assert_eq!(params.body.len(), 1);
    assert_eq!(params.body[0][0], "body");
    assert_eq!(
        params.body[0][4],
        r##"required: true, schema: {"$ref":"#/definitions/Pet"}"##
    );
}

#[test]
fn response_properties_render_table() {
    let output = run("petstore-v2.json");
    let block = find_block(&output.nodes, "GET /pet/{petId}");

    let t = tables(block);
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].body[0], vec!["petId", "path", "ID of pet to return", "integer", "required: true, format: int64"]);
    assert_eq!(
        t[1].body,
        vec![vec!["id", "Pet identifier", "integer"], vec!["name", "", "string"]]
    );
}

#[test]
fn selected_tags_filter_sections() {
    let output = run("petstore-v2.json\nstore");

    assert!(output.diagnostics.is_empty());
    assert_eq!(titles(&output.nodes), vec!["store"]);
}

#[test]
fn invalid_tag_is_reported_but_not_fatal() {
    let output = run("petstore-v2.json\npet\nX\nY");

    assert!(!output.is_error());
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].contains("'X'"));
    assert!(output.diagnostics[0].contains("petstore-v2.json"));
    assert_eq!(titles(&output.nodes), vec!["pet"]);
}

#[test]
fn only_invalid_tags_yield_no_sections() {
    let output = run("petstore-v2.json\nX");

    assert!(!output.is_error());
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.nodes.is_empty());
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_document_uses_default_group() {
    let output = run("petstore-v2.yaml");

    assert!(!output.is_error());
    assert_eq!(output.dependencies, vec![fixtures_dir().join("petstore-v2.yaml")]);
    assert_eq!(titles(&output.nodes), vec![""]);
    assert_eq!(
        titles(output.nodes[0].children()),
        vec!["GET /pets", "POST /pets", "GET /pets/{petId}"]
    );

    let list = find_block(&output.nodes, "GET /pets");
    let params = tables(list)[0];
    assert_eq!(
        params.body[0],
        vec![
            "limit",
            "query",
            "How many items to return at one time",
            "integer",
            "required: false, format: int32"
        ]
    );
}

#[cfg(feature = "yaml")]
#[test]
fn default_group_title_is_configurable() {
    let directive = SwaggerDirective::new(SwaggerDocConfig {
        doc_root: fixtures_dir(),
        default_group_title: "Endpoints".to_string(),
        ..SwaggerDocConfig::default()
    });

    let output = directive.run(&DirectiveContent::new(
        "petstore-v2.yaml",
        vec!["Endpoints".to_string()],
    ));

    assert!(output.diagnostics.is_empty());
    assert_eq!(titles(&output.nodes), vec!["Endpoints"]);
}

#[test]
fn file_url_is_supported() {
    let path = fixtures_dir().join("petstore-v2.json");
    let url = format!("file://{}", path.display());

    let output = directive().run(&DirectiveContent::new(url, vec!["user".to_string()]));

    assert!(!output.is_error());
    assert_eq!(titles(&output.nodes), vec!["user"]);
    assert_eq!(output.dependencies, vec![path]);
}
