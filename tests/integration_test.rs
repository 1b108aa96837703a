use froggy_pies::catalog::crust_tag;
use froggy_pies::lifecycle::RecipeSystem;
use froggy_pies::model::{Difficulty, RecipeCreate, RecipeId, RecipeKind};
use froggy_pies::ActorClient;

fn pie(title: &str, ingredients: &[&str]) -> RecipeCreate {
    RecipeCreate {
        title: title.to_string(),
        kind: RecipeKind::Pie,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        instructions: "Bake it".to_string(),
        notes: None,
        image_type: "berry-red".to_string(),
        tags: vec![],
        bake_temp: Some(375),
        difficulty: Difficulty::Medium,
    }
}

/// Full end-to-end run against the real store actor.
#[tokio::test]
async fn test_recipe_store_lifecycle() {
    let system = RecipeSystem::new(16);
    let client = system.recipe_client.clone();

    // Create
    let apple = client
        .create_recipe(pie("Apple Pie", &["apples", "sugar", "crust"]))
        .await
        .expect("Failed to create recipe");
    assert_eq!(apple.id, RecipeId(1));
    let pecan = client
        .create_recipe(pie("Pecan Pie", &["pecans", "corn syrup"]))
        .await
        .unwrap();
    assert_eq!(pecan.id, RecipeId(2));

    // Read back exactly what create returned
    assert_eq!(client.get(apple.id).await.unwrap(), Some(apple.clone()));
    assert_eq!(client.list().await.unwrap(), vec![apple.clone(), pecan.clone()]);

    // Update keeps the id and the list position
    let renamed = client
        .update_recipe(RecipeId(1), pie("Dutch Apple Pie", &["apples"]))
        .await
        .unwrap();
    assert_eq!(renamed.id, RecipeId(1));
    let titles: Vec<_> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, ["Dutch Apple Pie", "Pecan Pie"]);

    // Delete is idempotent and ids are never reused
    client.delete(RecipeId(2)).await.unwrap();
    client.delete(RecipeId(2)).await.unwrap();
    assert_eq!(client.get(RecipeId(2)).await.unwrap(), None);
    let cherry = client.create_recipe(pie("Cherry Pie", &[])).await.unwrap();
    assert_eq!(cherry.id, RecipeId(3));

    drop(client);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_update_of_missing_id_appends() {
    let system = RecipeSystem::new(16);
    let client = &system.recipe_client;

    client.create_recipe(pie("Apple Pie", &[])).await.unwrap();
    let upserted = client
        .update_recipe(RecipeId(7), pie("Key Lime Pie", &["limes"]))
        .await
        .unwrap();
    assert_eq!(upserted.id, RecipeId(7));

    let ids: Vec<_> = client.list().await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, [RecipeId(1), RecipeId(7)]);

    // The counter keeps going from where it was
    let next = client.create_recipe(pie("Pumpkin Pie", &[])).await.unwrap();
    assert_eq!(next.id, RecipeId(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_ignores_case_and_keeps_order() {
    let system = RecipeSystem::new(16);
    let client = &system.recipe_client;

    client
        .create_recipe(pie("Chocolate Silk", &["dark chocolate", "cream"]))
        .await
        .unwrap();
    client
        .create_recipe(pie("Banana Cream", &["bananas", "Heavy CREAM"]))
        .await
        .unwrap();
    client.create_recipe(pie("Apple Pie", &["apples"])).await.unwrap();

    let hits = client.search_recipes("cream").await.unwrap();
    let titles: Vec<_> = hits.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Chocolate Silk", "Banana Cream"]);

    assert_eq!(client.search_recipes("").await.unwrap().len(), 3);
    assert!(client.search_recipes("rhubarb").await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_pie_references_crust_by_tag() {
    let system = RecipeSystem::new(16);
    let client = &system.recipe_client;

    let mut crust = pie("Butter Crust", &["flour", "butter"]);
    crust.kind = RecipeKind::Crust;
    crust.image_type = "classic".to_string();
    let crust = client.create_recipe(crust).await.unwrap();

    let mut filled = pie("Blueberry Pie", &["blueberries"]);
    filled.tags = vec!["fruit".to_string(), crust_tag(crust.id)];
    let filled = client.create_recipe(filled).await.unwrap();

    let referenced = filled.crust_references();
    assert_eq!(referenced, vec![crust.id]);
    let found = client.get(referenced[0]).await.unwrap().unwrap();
    assert_eq!(found.kind, RecipeKind::Crust);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_clients() {
    let system = RecipeSystem::new(4);
    let client = system.recipe_client.clone();

    let worker = tokio::spawn(async move {
        for i in 0..10 {
            client
                .create_recipe(pie(&format!("Pie {i}"), &[]))
                .await
                .unwrap();
        }
        client.list().await.unwrap().len()
    });

    system.shutdown().await.unwrap();
    assert_eq!(worker.await.unwrap(), 10);
}
