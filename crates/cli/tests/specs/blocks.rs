// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocks specs
//!
//! Verify `panel blocks` lists the dynamic block tree.

use crate::prelude::*;

const DOMAINS_TEMPLATE: &str = r#"<!-- INCLUDE "partials/message.tpl" -->
<table>
<!-- BDP: domain_list -->
<!-- BDP: domain_item --><tr><td>{DOMAIN_NAME}</td>
<!-- BDP: domain_alias --><td>{ALIAS}</td><!-- EDP: domain_alias -->
</tr><!-- EDP: domain_item -->
<!-- EDP: domain_list -->
</table>
"#;

#[test]
fn blocks_prints_indented_tree() {
    let temp = Project::empty();
    temp.file("client/domains.tpl", DOMAINS_TEMPLATE);
    temp.file(
        "client/partials/message.tpl",
        "<!-- BDP: page_message --><p>{MESSAGE}</p><!-- EDP: page_message -->",
    );

    temp.panel()
        .args(&["blocks", "client/domains.tpl"])
        .passes()
        .stdout_eq("page_message\ndomain_list\n  domain_item\n    domain_alias\n");
}

#[test]
fn blocks_prints_json() {
    let temp = Project::empty();
    temp.file("list.tpl", ROWS_TEMPLATE);

    let out = temp
        .panel()
        .args(&["blocks", "list.tpl", "--format", "json"])
        .passes()
        .stdout();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, serde_json::json!([{ "name": "row", "depth": 0 }]));
}

#[test]
fn blocks_of_missing_template_fails() {
    let temp = Project::empty();

    temp.panel()
        .args(&["blocks", "nope.tpl"])
        .fails()
        .stderr_has("error: couldn't find the")
        .stderr_has("nope.tpl");
}
