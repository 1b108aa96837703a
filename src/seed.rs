//! Starter recipes for an empty catalog.
//!
//! Loaded at startup when the server runs with `--seed`. The crust goes in first so the
//! pies can point at it with a crust tag.

use crate::catalog::{crust_tag, select_image_type};
use crate::clients::RecipeClient;
use crate::model::{Difficulty, Recipe, RecipeCreate, RecipeKind};
use crate::recipe_actor::RecipeError;
use tracing::{info, instrument};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn graham_crust() -> RecipeCreate {
    RecipeCreate {
        title: "Graham Cracker Crust".to_string(),
        kind: RecipeKind::Crust,
        ingredients: lines(&[
            "1 1/2 cups graham cracker crumbs",
            "1/3 cup sugar",
            "6 tbsp melted butter",
        ]),
        instructions: "Stir the crumbs and sugar together, mix in the butter and press firmly \
                       into a 9-inch pie plate. Bake 8 minutes and cool before filling."
            .to_string(),
        notes: None,
        image_type: select_image_type(RecipeKind::Crust, "graham").to_string(),
        tags: lines(&["baked"]),
        bake_temp: Some(350),
        difficulty: Difficulty::Easy,
    }
}

fn chocolate_cream_pie(crust: &Recipe) -> RecipeCreate {
    RecipeCreate {
        title: "Chocolate Cream Pie".to_string(),
        kind: RecipeKind::Pie,
        ingredients: lines(&[
            "2/3 cup sugar",
            "1/4 cup cornstarch",
            "3 cups whole milk",
            "4 egg yolks",
            "6 oz bittersweet chocolate",
            "whipped cream",
        ]),
        instructions: "Cook the sugar, cornstarch, milk and yolks until thick, stir in the \
                       chocolate and pour into the cooled crust. Chill 4 hours and top with \
                       whipped cream."
            .to_string(),
        notes: Some("Press plastic wrap onto the filling so no skin forms.".to_string()),
        image_type: select_image_type(RecipeKind::Pie, "chocolate").to_string(),
        tags: vec![
            "no-bake".to_string(),
            "chocolate".to_string(),
            "cream".to_string(),
            crust_tag(crust.id),
            "tried".to_string(),
        ],
        bake_temp: None,
        difficulty: Difficulty::Medium,
    }
}

fn blueberry_cheesecake(crust: &Recipe) -> RecipeCreate {
    RecipeCreate {
        title: "Blueberry Cheesecake".to_string(),
        kind: RecipeKind::Pie,
        ingredients: lines(&[
            "16 oz cream cheese",
            "1/2 cup sugar",
            "2 eggs",
            "1 tsp vanilla",
            "1 cup blueberries",
        ]),
        instructions: "Beat the cream cheese and sugar, add the eggs and vanilla, and pour \
                       into the crust. Bake until just set, cool and top with blueberries."
            .to_string(),
        notes: None,
        image_type: select_image_type(RecipeKind::Pie, "cheesecake").to_string(),
        tags: vec![
            "baked".to_string(),
            "fruit".to_string(),
            "custard".to_string(),
            crust_tag(crust.id),
            "to-do".to_string(),
        ],
        bake_temp: Some(325),
        difficulty: Difficulty::Hard,
    }
}

/// Creates the starter crust and the pies built on it. Returns them in creation order.
#[instrument(skip(client))]
pub async fn load_starter_recipes(client: &RecipeClient) -> Result<Vec<Recipe>, RecipeError> {
    let crust = client.create_recipe(graham_crust()).await?;
    let chocolate = client.create_recipe(chocolate_cream_pie(&crust)).await?;
    let cheesecake = client.create_recipe(blueberry_cheesecake(&crust)).await?;

    let loaded = vec![crust, chocolate, cheesecake];
    info!(count = loaded.len(), "Loaded starter recipes");
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_actor;
    use actor_framework::ActorClient;

    #[tokio::test]
    async fn test_starter_pies_reference_the_starter_crust() {
        let (actor, client) = recipe_actor::new(8);
        tokio::spawn(actor.run());

        let loaded = load_starter_recipes(&client).await.unwrap();
        let crust = &loaded[0];
        assert_eq!(crust.kind, RecipeKind::Crust);
        assert_eq!(crust.image_type, "graham");

        for pie in &loaded[1..] {
            assert_eq!(pie.kind, RecipeKind::Pie);
            assert_eq!(pie.crust_references(), vec![crust.id]);
        }
        assert_eq!(loaded[1].image_type, "chocolate");
        assert_eq!(loaded[2].image_type, "cheesecake");
        assert_eq!(loaded[2].status_tag(), Some("to-do"));

        assert_eq!(client.list().await.unwrap(), loaded);
    }
}
