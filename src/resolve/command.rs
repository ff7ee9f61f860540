// src/resolve/command.rs

//! Subprocess-backed dependency resolver.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use tracing::{debug, info};

use crate::bazel::BazelClient;
use crate::errors::Result;
use crate::resolve::labels::map_labels_to_files;
use crate::resolve::{FileSets, Resolver};

const SOURCE_QUERY_TEMPLATE: &str = "kind(\"source file\", deps(set({})))";
const BUILD_QUERY_TEMPLATE: &str = "buildfiles(deps(set({})))";
const WORKSPACE_FILE_NAME: &str = "WORKSPACE";

/// Resolves file sets by asking bazel, via `info` and `query` subprocesses.
///
/// Any subprocess failure aborts the whole resolution and surfaces to the
/// caller unchanged. There is no retrying and no partial result.
#[derive(Debug, Clone)]
pub struct CommandResolver {
    client: BazelClient,
}

impl CommandResolver {
    pub fn new(client: BazelClient) -> Self {
        Self { client }
    }

    async fn resolve_inner(&self, target_expression: &str) -> Result<FileSets> {
        let output_base = self.client.info("output_base").await?;
        let workspace = self.client.info("workspace").await?;
        let output_base = Path::new(&output_base);
        let workspace = Path::new(&workspace);

        let source_query = SOURCE_QUERY_TEMPLATE.replace("{}", target_expression);
        let labels = self.client.query(&source_query).await?;
        let source_files = map_labels_to_files(&labels, output_base, workspace);

        let build_query = BUILD_QUERY_TEMPLATE.replace("{}", target_expression);
        let labels = self.client.query(&build_query).await?;
        let mut build_files = map_labels_to_files(&labels, output_base, workspace);

        // Changes to the workspace marker file can alter the entire graph,
        // and it does not always show up in the buildfiles query output.
        build_files.push(workspace.join(WORKSPACE_FILE_NAME));

        info!(
            sources = source_files.len(),
            build_files = build_files.len(),
            "resolved dependency file sets"
        );
        debug!(?source_files, ?build_files, "resolved paths");

        Ok(FileSets {
            source_files,
            build_files,
        })
    }
}

impl Resolver for CommandResolver {
    fn resolve(
        &mut self,
        target_expression: &str,
    ) -> Pin<Box<dyn Future<Output = Result<FileSets>> + Send + '_>> {
        let target_expression = target_expression.to_string();
        Box::pin(async move { self.resolve_inner(&target_expression).await })
    }
}
