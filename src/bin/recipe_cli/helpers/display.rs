// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Renders the recipe list and the per-ingredient calorie table

use recipe_proxy::models::{RecipeDetail, RecipeSummary};

/// Print one `id  title` row per recipe
pub fn display_recipe_list(recipes: &[RecipeSummary]) {
    for recipe in recipes {
        println!("{:>8}  {}", recipe.id, recipe.title);
    }
}

/// Print title, ingredient table, and total
pub fn display_recipe_detail(recipe: &RecipeDetail) {
    println!("{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.chars().count().max(20)));
    if !recipe.image.is_empty() {
        println!("Image: {}", recipe.image);
    }
    println!();

    for ingredient in &recipe.ingredients {
        println!(
            "  {} {} {}  {} Kcal",
            ingredient.amount, ingredient.unit, ingredient.name, ingredient.calories
        );
    }

    println!();
    println!("Total: {:.0} Kcal", recipe.total_calories);
    if recipe.unresolved_ingredients > 0 {
        println!(
            "({} ingredient(s) without nutrition data counted as 0)",
            recipe.unresolved_ingredients
        );
    }
}
