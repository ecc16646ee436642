//! Pipeline listing and latest-build resolution
//!
//! Both operations fan out one request chain per organization or project and
//! join the results with `try_join_all`, so the first failing request fails
//! the whole batch and the output order follows the input order.

use buildwatch_plugin_api::{
    AvailablePipeline,
    BuildStatus,
    Items,
    PluginResult,
};
use futures::future::try_join_all;

use crate::client::BuildkiteApi;
use crate::config::ProjectRef;
use crate::{
    mapper,
    types,
};

/// Lists every pipeline of every organization, slug-sorted per organization.
pub(crate) async fn fetch_all_available_pipelines<A: BuildkiteApi + ?Sized>(
    api: &A,
) -> PluginResult<Items<AvailablePipeline>> {
    let organizations = api.organizations().await?;
    if organizations.is_empty() {
        return Ok(Items::empty());
    }

    let per_org = try_join_all(organizations.iter().map(|org| async move {
        let pipelines = api.pipelines(&org.pipelines_url).await?;
        tracing::debug!(org = %org.slug, count = pipelines.len(), "Fetched pipelines");
        PluginResult::Ok(mapper::map_org_pipelines(org, pipelines))
    }))
    .await?;

    Ok(per_org.into_iter().flatten().collect::<Vec<_>>().into())
}

async fn resolve_project<A: BuildkiteApi + ?Sized>(
    api: &A, project: &ProjectRef,
) -> PluginResult<Option<BuildStatus>> {
    let Some(latest) = api.latest_build(&project.org, &project.pipeline).await? else {
        tracing::debug!(project = %project.id(), "Pipeline has no builds");
        return Ok(None);
    };

    let status = mapper::map_build(&latest, project);
    if latest.state.is_finished() {
        return Ok(Some(status));
    }

    tracing::debug!(
        project = %project.id(),
        build = latest.number,
        state = ?latest.state,
        "Latest build in flight, resolving last finished build"
    );
    let finished: Option<types::Build> = api
        .latest_finished_build(&project.org, &project.pipeline)
        .await?;

    Ok(Some(mapper::merge_finished(status, finished.as_ref())))
}

/// Resolves the status of each project, preserving project order.
pub(crate) async fn fetch_latest_builds<A: BuildkiteApi + ?Sized>(
    api: &A, projects: &[ProjectRef],
) -> PluginResult<Items<BuildStatus>> {
    if projects.is_empty() {
        return Ok(Items::empty());
    }

    let statuses =
        try_join_all(projects.iter().map(|project| resolve_project(api, project))).await?;

    Ok(statuses.into_iter().flatten().collect::<Vec<_>>().into())
}
