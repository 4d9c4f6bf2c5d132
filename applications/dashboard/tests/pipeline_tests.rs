/// Pipeline tests: mock upstream, real SQLite file
mod common;

use common::{fixtures, TestEnv};
use userboard::{output, DashboardError, Pipeline};
use userboard_report::{ChartId, Renderer};
use userboard_storage::users;

#[tokio::test]
async fn test_run_builds_every_chart() {
    let env = TestEnv::new().await;
    env.respond_with_users(fixtures::five_users()).await;

    let pipeline = Pipeline::from_config(&env.config).await.unwrap();
    let dashboard = pipeline.run().await.unwrap();

    assert_eq!(dashboard.frame.len(), 5);
    assert_eq!(dashboard.summary.total_users, 5);
    assert_eq!(dashboard.summary.distinct_domains, 4);
    assert_eq!(dashboard.charts.len(), ChartId::ALL.len());

    let domains = dashboard.frame.domain_counts();
    assert_eq!(domains[0].value, "april.biz");
    assert_eq!(domains[0].count, 2);
    assert_eq!(domains.iter().map(|d| d.count).sum::<usize>(), 5);

    assert_eq!(users::count(pipeline.pool()).await.unwrap(), 5);
}

#[tokio::test]
async fn test_rerun_overwrites_table() {
    let env = TestEnv::new().await;
    let pipeline = Pipeline::from_config(&env.config).await.unwrap();

    env.respond_with_users(fixtures::five_users()).await;
    pipeline.run().await.unwrap();

    env.respond_with_users(fixtures::two_users()).await;
    let dashboard = pipeline.run().await.unwrap();

    assert_eq!(dashboard.frame.len(), 2);
    assert_eq!(users::count(pipeline.pool()).await.unwrap(), 2);

    let ids: Vec<i64> = dashboard.frame.rows().iter().map(|r| r.row.id).collect();
    assert_eq!(ids, [9, 10]);
}

#[tokio::test]
async fn test_network_failure_leaves_table_untouched() {
    let env = TestEnv::new().await;
    let pipeline = Pipeline::from_config(&env.config).await.unwrap();

    env.respond_with_users(fixtures::five_users()).await;
    pipeline.run().await.unwrap();

    env.respond_with_status(500).await;
    let err = pipeline.run().await.unwrap_err();

    assert!(matches!(err, DashboardError::Fetch(_)), "got {:?}", err);
    assert_eq!(users::count(pipeline.pool()).await.unwrap(), 5);
}

#[tokio::test]
async fn test_malformed_body_is_a_fault() {
    let env = TestEnv::new().await;
    env.respond_with_users(serde_json::json!([{ "id": 1 }])).await;

    let pipeline = Pipeline::from_config(&env.config).await.unwrap();
    let err = pipeline.run().await.unwrap_err();

    assert!(matches!(err, DashboardError::Client(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_selected_charts_only() {
    let mut env = TestEnv::new().await;
    env.config.report.charts = vec![ChartId::CityBar, ChartId::DomainPie];
    env.respond_with_users(fixtures::five_users()).await;

    let dashboard = Pipeline::from_config(&env.config)
        .await
        .unwrap()
        .run()
        .await
        .unwrap();

    let ids: Vec<_> = dashboard.charts.iter().map(|c| c.id).collect();
    assert_eq!(ids, [ChartId::CityBar, ChartId::DomainPie]);
}

#[tokio::test]
async fn test_write_bundle() {
    let env = TestEnv::new().await;
    env.respond_with_users(fixtures::five_users()).await;

    let dashboard = Pipeline::from_config(&env.config)
        .await
        .unwrap()
        .run()
        .await
        .unwrap();
    let renderer = Renderer::new().unwrap();

    let index = output::write_bundle(&renderer, &dashboard, &env.output_dir())
        .await
        .unwrap();

    let page = std::fs::read_to_string(&index).unwrap();
    assert!(page.contains("Data fetched successfully (5 rows)"));
    assert!(page.contains("Lucio_Hettinger@april.biz"));

    for id in ChartId::ALL {
        let export = env
            .output_dir()
            .join(output::CHARTS_DIR)
            .join(id.export_file_name());
        let html = std::fs::read_to_string(&export).unwrap();
        assert!(html.contains(&format!("chart-{}", id.slug())));
    }
}

#[tokio::test]
async fn test_write_failure_page() {
    let env = TestEnv::new().await;
    let renderer = Renderer::new().unwrap();

    let index = output::write_failure(
        &renderer,
        "Users dashboard",
        &env.config.source.url,
        "Server error (500): upstream down",
        &env.output_dir(),
    )
    .await
    .unwrap();

    let page = std::fs::read_to_string(index).unwrap();
    assert!(page.contains("Error fetching data: Server error (500): upstream down"));
}
