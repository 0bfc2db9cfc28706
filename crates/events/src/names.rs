// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Well-known event names
//!
//! Event names are free-form; these are the ones page scripts, the template
//! engine and plugins agree on. Parameter keys are listed next to each event.

// Script lifecycle
pub const ON_LOGIN_SCRIPT_START: &str = "onLoginScriptStart";
pub const ON_LOGIN_SCRIPT_END: &str = "onLoginScriptEnd";
pub const ON_ADMIN_SCRIPT_START: &str = "onAdminScriptStart";
pub const ON_ADMIN_SCRIPT_END: &str = "onAdminScriptEnd";
pub const ON_RESELLER_SCRIPT_START: &str = "onResellerScriptStart";
pub const ON_RESELLER_SCRIPT_END: &str = "onResellerScriptEnd";
pub const ON_CLIENT_SCRIPT_START: &str = "onClientScriptStart";
pub const ON_CLIENT_SCRIPT_END: &str = "onClientScriptEnd";

// Authentication
pub const ON_BEFORE_AUTHENTICATION: &str = "onBeforeAuthentication";
/// Listeners set `authResult`
pub const ON_AUTHENTICATION: &str = "onAuthentication";
/// `authResult`
pub const ON_AFTER_AUTHENTICATION: &str = "onAfterAuthentication";
/// `identity`
pub const ON_BEFORE_SET_IDENTITY: &str = "onBeforeSetIdentity";

// Provisioning
pub const ON_BEFORE_ADD_FTP: &str = "onBeforeAddFtp";
pub const ON_AFTER_ADD_FTP: &str = "onAfterAddFtp";
pub const ON_BEFORE_ADD_DOMAIN: &str = "onBeforeAddDomain";
pub const ON_AFTER_ADD_DOMAIN: &str = "onAfterAddDomain";
pub const ON_BEFORE_ADD_DOMAIN_ALIAS: &str = "onBeforeAddDomainAlias";
pub const ON_AFTER_ADD_DOMAIN_ALIAS: &str = "onAfterAddDomainAlias";
pub const ON_MOVE_CUSTOMER: &str = "onMoveCustomer";

// Database statements: `queryString`, `params`
pub const ON_BEFORE_QUERY_PREPARE: &str = "onBeforeQueryPrepare";
pub const ON_AFTER_QUERY_PREPARE: &str = "onAfterQueryPrepare";
pub const ON_BEFORE_QUERY_EXECUTE: &str = "onBeforeQueryExecute";
pub const ON_AFTER_QUERY_EXECUTE: &str = "onAfterQueryExecute";

// User interface
/// `translations`
pub const ON_GET_JS_TRANSLATIONS: &str = "onGetJsTranslations";

// Template engine
/// `pname`, `tname`
pub const ON_PARSE_TEMPLATE: &str = "onParseTemplate";
/// `templatePath`
pub const ON_BEFORE_ASSEMBLE_TEMPLATE_FILES: &str = "onBeforeAssembleTemplateFiles";
/// `templatePath`
pub const ON_BEFORE_LOAD_TEMPLATE_FILE: &str = "onBeforeLoadTemplateFile";
/// `templatePath`, `templateContent` (read back after dispatch)
pub const ON_AFTER_LOAD_TEMPLATE_FILE: &str = "onAfterLoadTemplateFile";
/// `templatePath`, `templateContent` (read back after dispatch)
pub const ON_AFTER_ASSEMBLE_TEMPLATE_FILES: &str = "onAfterAssembleTemplateFiles";

// Command line rendering
/// `manifest`
pub const ON_RENDER_START: &str = "onRenderStart";
/// `manifest`, `output`, `content` (listeners may rewrite `content`)
pub const ON_RENDER_END: &str = "onRenderEnd";
