//! The built-in CI/CD deployment pipeline topology.
//!
//! This module declares the fixed architecture diagram Gantry exists to
//! produce: a GitHub repository feeding a GitHub Actions pipeline that
//! deploys a PHP web application to an Azure App Service, reached by end
//! users over HTTPS.
//!
//! The project historically carried two hand-maintained variants of this
//! diagram that had drifted apart (one with a Terraform-state storage
//! account and a runtime marker, one without). [`PipelineOptions`]
//! consolidates them: both extras are toggles, on by default, so either
//! variant can still be produced from the single generator.

use log::debug;

use gantry_core::{
    color::Color,
    graph::{Diagram, Edge, GraphError},
    icon::Icon,
    style::EdgeStyle,
};

/// Knobs for the generated pipeline diagram.
///
/// The defaults reproduce the documented portal deployment: title,
/// resource group, plan SKU, and runtime all match the original diagram.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Diagram title.
    pub title: String,
    /// Azure resource group name shown on its cluster.
    pub resource_group: String,
    /// App Service plan SKU shown on the plan node.
    pub plan_sku: String,
    /// Application runtime shown on the web app and runtime nodes.
    pub runtime: String,
    /// Include the Terraform-state storage account and its provisioning edge.
    pub state_storage: bool,
    /// Include the separate application-runtime node.
    pub runtime_node: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            title: "Portal Educativo PHP - Azure CI/CD".to_string(),
            resource_group: "php-cicd-portal-rg".to_string(),
            plan_sku: "Linux F1".to_string(),
            runtime: "PHP 8.2".to_string(),
            state_storage: true,
            runtime_node: true,
        }
    }
}

/// Declares the pipeline diagram described by `options`.
///
/// Nodes are declared before any edge that references them, clusters are
/// nested GitHub / Azure Cloud / resource group / hosting plan, and every
/// interaction of the deployment flow becomes a directed edge:
/// `push` from the repository to the pipeline, the dashed provisioning
/// and deployment edges from the pipeline into Azure, and the `HTTPS`
/// edge from end users to the web application.
///
/// # Errors
///
/// Returns [`GraphError`] if any declaration is inconsistent; with the
/// fixed topology below this does not happen, but the checked builder API
/// is used throughout rather than bypassing it.
pub fn build_pipeline(options: &PipelineOptions) -> Result<Diagram, GraphError> {
    debug!(title = options.title; "Building pipeline diagram");

    let mut diagram = Diagram::new(&options.title);

    let users = diagram.add_node("Usuarios", Icon::Users);

    let github = diagram.add_cluster("GitHub");
    let repo = diagram.add_node("Repositorio\nPHP Portal", Icon::Repository);
    let actions = diagram.add_node("GitHub Actions\nCI/CD Pipeline", Icon::Pipeline);
    diagram.place(github, repo)?;
    diagram.place(github, actions)?;

    let azure = diagram.add_cluster("Azure Cloud");
    let resource_group = diagram.add_child_cluster(
        azure,
        format!("Resource Group\n{}", options.resource_group),
    )?;

    let storage = if options.state_storage {
        let storage = diagram.add_node("Storage Account\nTerraform State", Icon::StorageAccount);
        diagram.place(resource_group, storage)?;
        Some(storage)
    } else {
        None
    };

    let hosting = diagram.add_child_cluster(
        resource_group,
        format!("App Service Plan\n({})", options.plan_sku),
    )?;
    let plan = diagram.add_node("Plan", Icon::AppServicePlan);
    let webapp = diagram.add_node(format!("Linux Web App\n{}", options.runtime), Icon::WebApp);
    diagram.place(hosting, plan)?;
    diagram.place(hosting, webapp)?;

    let runtime = if options.runtime_node {
        let runtime = diagram.add_node(format!("{}\nRuntime", options.runtime), Icon::Runtime);
        diagram.place(hosting, runtime)?;
        Some(runtime)
    } else {
        None
    };

    // Deployment flow
    diagram.connect(Edge::new(repo, actions).with_label("push"))?;
    diagram.connect(Edge::new(plan, webapp))?;
    if let Some(runtime) = runtime {
        diagram.connect(Edge::new(webapp, runtime).with_style(EdgeStyle::Dotted))?;
    }
    if let Some(storage) = storage {
        diagram.connect(
            Edge::new(actions, storage)
                .with_label("Terraform state")
                .with_style(EdgeStyle::Dashed)
                .with_color(palette("darkgreen")),
        )?;
    }
    diagram.connect(
        Edge::new(actions, webapp)
            .with_label("Deploy")
            .with_style(EdgeStyle::Dashed)
            .with_color(palette("blue")),
    )?;
    diagram.connect(Edge::new(users, webapp).with_label("HTTPS"))?;

    debug!(
        nodes = diagram.nodes_count(),
        edges = diagram.edges().len();
        "Pipeline diagram built"
    );

    Ok(diagram)
}

fn palette(name: &str) -> Color {
    Color::new(name).expect("edge palette uses valid CSS color names")
}

#[cfg(test)]
mod tests {
    use gantry_core::graph::NodeId;

    use super::*;

    fn find_node(diagram: &Diagram, label: &str) -> Option<NodeId> {
        diagram
            .nodes()
            .find(|(_, node)| node.label() == label)
            .map(|(id, _)| id)
    }

    #[test]
    fn test_default_topology_counts() {
        let diagram = build_pipeline(&PipelineOptions::default()).unwrap();

        // users, repo, actions, storage, plan, webapp, runtime
        assert_eq!(diagram.nodes_count(), 7);
        assert_eq!(diagram.edges().len(), 6);
        // GitHub, Azure Cloud, resource group, hosting plan
        assert_eq!(diagram.clusters_count(), 4);
        assert_eq!(diagram.root_clusters().count(), 2);
    }

    #[test]
    fn test_minimal_variant_omits_extras() {
        let options = PipelineOptions {
            state_storage: false,
            runtime_node: false,
            ..PipelineOptions::default()
        };
        let diagram = build_pipeline(&options).unwrap();

        assert_eq!(diagram.nodes_count(), 5);
        assert_eq!(diagram.edges().len(), 4);
        assert!(find_node(&diagram, "Storage Account\nTerraform State").is_none());
        assert!(find_node(&diagram, "PHP 8.2\nRuntime").is_none());
    }

    #[test]
    fn test_every_edge_endpoint_is_declared() {
        let diagram = build_pipeline(&PipelineOptions::default()).unwrap();

        for edge in diagram.edges() {
            assert!(diagram.node(edge.source()).is_some());
            assert!(diagram.node(edge.target()).is_some());
        }
    }

    #[test]
    fn test_cluster_hierarchy() {
        let diagram = build_pipeline(&PipelineOptions::default()).unwrap();

        let roots: Vec<_> = diagram.root_clusters().collect();
        let titles: Vec<&str> = roots
            .iter()
            .map(|id| diagram.cluster(*id).unwrap().title())
            .collect();
        assert_eq!(titles, vec!["GitHub", "Azure Cloud"]);

        // Azure Cloud -> resource group -> hosting plan
        let azure = diagram.cluster(roots[1]).unwrap();
        assert_eq!(azure.children().len(), 1);
        let resource_group = diagram.cluster(azure.children()[0]).unwrap();
        assert!(resource_group.title().starts_with("Resource Group"));
        assert!(resource_group.title().contains("php-cicd-portal-rg"));
        assert_eq!(resource_group.children().len(), 1);
        let hosting = diagram.cluster(resource_group.children()[0]).unwrap();
        assert_eq!(hosting.title(), "App Service Plan\n(Linux F1)");
        assert!(hosting.children().is_empty());
    }

    #[test]
    fn test_node_placements() {
        let diagram = build_pipeline(&PipelineOptions::default()).unwrap();

        let users = find_node(&diagram, "Usuarios").unwrap();
        let webapp = find_node(&diagram, "Linux Web App\nPHP 8.2").unwrap();
        let storage = find_node(&diagram, "Storage Account\nTerraform State").unwrap();

        // End users sit outside every cluster.
        assert_eq!(diagram.cluster_of(users), None);

        let webapp_cluster = diagram.cluster_of(webapp).unwrap();
        assert!(
            diagram
                .cluster(webapp_cluster)
                .unwrap()
                .title()
                .starts_with("App Service Plan")
        );

        let storage_cluster = diagram.cluster_of(storage).unwrap();
        assert!(
            diagram
                .cluster(storage_cluster)
                .unwrap()
                .title()
                .starts_with("Resource Group")
        );
    }

    #[test]
    fn test_deployment_edges() {
        let diagram = build_pipeline(&PipelineOptions::default()).unwrap();

        let labels: Vec<Option<&str>> = diagram.edges().iter().map(|edge| edge.label()).collect();
        assert!(labels.contains(&Some("push")));
        assert!(labels.contains(&Some("Terraform state")));
        assert!(labels.contains(&Some("Deploy")));
        assert!(labels.contains(&Some("HTTPS")));

        let deploy = diagram
            .edges()
            .iter()
            .find(|edge| edge.label() == Some("Deploy"))
            .unwrap();
        assert_eq!(deploy.style(), Some(EdgeStyle::Dashed));
        assert_eq!(deploy.color().unwrap().as_str(), "blue");

        let actions = find_node(&diagram, "GitHub Actions\nCI/CD Pipeline").unwrap();
        let webapp = find_node(&diagram, "Linux Web App\nPHP 8.2").unwrap();
        assert_eq!(deploy.source(), actions);
        assert_eq!(deploy.target(), webapp);
    }

    #[test]
    fn test_custom_options_flow_into_labels() {
        let options = PipelineOptions {
            title: "Staging".to_string(),
            resource_group: "staging-rg".to_string(),
            plan_sku: "Linux B1".to_string(),
            runtime: "PHP 8.3".to_string(),
            ..PipelineOptions::default()
        };
        let diagram = build_pipeline(&options).unwrap();

        assert_eq!(diagram.title(), "Staging");
        assert!(find_node(&diagram, "Linux Web App\nPHP 8.3").is_some());
        assert!(find_node(&diagram, "PHP 8.3\nRuntime").is_some());
    }

    #[test]
    fn test_plan_sku_titles_the_hosting_cluster() {
        let options = PipelineOptions {
            plan_sku: "Linux B1".to_string(),
            ..PipelineOptions::default()
        };
        let diagram = build_pipeline(&options).unwrap();

        let plan = find_node(&diagram, "Plan").unwrap();
        let hosting = diagram.cluster_of(plan).unwrap();
        assert_eq!(
            diagram.cluster(hosting).unwrap().title(),
            "App Service Plan\n(Linux B1)"
        );
    }
}
