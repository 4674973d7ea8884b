use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::{load_config, validate_language_id},
    issues::Severity,
    rules::{CheckInput, run_checks},
};

use super::helpers::{json_result, load_context, page_bounds};
use super::types::{
    CheckCatalogsParams, CheckResult, ConfigDto, ConfigValues, GetConfigParams,
    GetLanguageParams, IssueItem, KeyItem, KeyListResult, LanguageResult, ListKeysParams,
    Pagination, SetLanguageParams, TranslateParams, TranslateResult,
};

#[derive(Clone)]
pub struct IsimMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for IsimMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl IsimMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Resolve a key in the active (or given) language
    #[tool(
        description = "Resolve a dotted translation key (e.g. hero.title) with optional {name} parameters. Returns the key itself when no translation exists."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;
        let state = ctx.state();

        let translator = match params.language.as_deref() {
            Some(language) => state.translator_for(language),
            None => state.translator(),
        };
        let interpolation = params.interpolation_params();

        json_result(&TranslateResult {
            found: translator.has(&params.key),
            value: translator.t_with(&params.key, &interpolation),
            language: translator.language().to_string(),
            key: params.key.clone(),
        })
    }

    /// Get the active language
    #[tool(description = "Get the active language, the default language and the languages that have catalogs.")]
    pub async fn get_language(
        &self,
        params: Parameters<GetLanguageParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        json_result(&language_result(&ctx, None))
    }

    /// Switch and persist the active language
    #[tool(
        description = "Switch the active language and persist it. Languages without a catalog are accepted; their lookups fall back to the key."
    )]
    pub async fn set_language(
        &self,
        params: Parameters<SetLanguageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        validate_language_id(&params.language)
            .map_err(|e| McpError::invalid_params(format!("{:#}", e), None))?;

        let mut ctx = load_context(&params.project_root_path)?;
        let previous = ctx.state().language().to_string();
        ctx.state_mut()
            .set_language(&params.language)
            .map_err(|e| McpError::internal_error(format!("{:#}", e), None))?;

        json_result(&language_result(&ctx, Some(previous)))
    }

    /// List catalog keys with values
    #[tool(description = "List the keys and values of a language's catalog, sorted by key. Paginated.")]
    pub async fn list_keys(
        &self,
        params: Parameters<ListKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (limit, offset) = page_bounds(params.limit, params.offset);
        let ctx = load_context(&params.project_root_path)?;

        let language = params
            .language
            .unwrap_or_else(|| ctx.state().language().to_string());
        let catalog = ctx.catalogs().get(&language);
        let entries = catalog.map(|c| c.leaf_entries()).unwrap_or_default();

        let total_count = entries.len();
        let items: Vec<KeyItem> = entries
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(key, value)| KeyItem {
                key,
                value: value.to_string(),
            })
            .collect();
        let has_more = offset + items.len() < total_count;

        json_result(&KeyListResult {
            has_catalog: catalog.is_some(),
            language,
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Run all catalog checks
    #[tool(
        description = "Check catalogs against the default language: missing translations, orphan keys, placeholder mismatches and untranslated values."
    )]
    pub async fn check_catalogs(
        &self,
        params: Parameters<CheckCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let catalog_source = ctx.catalog_source();

        let input = CheckInput {
            catalogs: ctx.catalogs(),
            default_language: &ctx.config.default_language,
            supported_languages: &ctx.config.supported_languages,
            catalog_source: &catalog_source,
        };
        let issues = run_checks(&[], &input, &ctx.warnings);

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        json_result(&CheckResult {
            languages: ctx
                .catalogs()
                .languages()
                .into_iter()
                .map(String::from)
                .collect(),
            error_count,
            warning_count: issues.len() - error_count,
            items: issues.iter().map(IssueItem::from).collect(),
            catalog_source,
        })
    }

    /// Get the current configuration
    #[tool(description = "Get the current isim-i18n configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = std::path::Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

fn language_result(
    ctx: &crate::core::context::I18nContext,
    previous: Option<String>,
) -> LanguageResult {
    let state = ctx.state();
    LanguageResult {
        language: state.language().to_string(),
        previous,
        default_language: ctx.config.default_language.clone(),
        has_catalog: state.is_supported(state.language()),
        available_languages: ctx
            .catalogs()
            .languages()
            .into_iter()
            .map(String::from)
            .collect(),
        storage_path: ctx.storage_path.display().to_string(),
    }
}

#[tool_handler]
impl ServerHandler for IsimMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "isim-i18n MCP resolves translations for the iSIM eSIM site and manages the active language.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_language - Get the active language and available catalogs\n\
                 3. set_language - Switch and persist the active language\n\
                 4. translate - Resolve a dotted key, with optional {name} parameters\n\
                 5. list_keys - List catalog keys and values (paginated)\n\
                 6. check_catalogs - Find missing, orphan, mismatched or untranslated entries\n\n\
                 A key that cannot be resolved comes back unchanged with found=false."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing::debug!("starting MCP server on stdio");
            let service = IsimMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
