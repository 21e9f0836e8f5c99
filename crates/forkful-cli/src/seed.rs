use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct IngredientPayload {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<&'static str>,
}

#[derive(Serialize)]
struct RecipePayload {
    title: &'static str,
    description: Option<&'static str>,
    ingredients: Vec<IngredientPayload>,
    instructions: &'static str,
    cook_time_minutes: Option<i32>,
    servings: Option<i32>,
    difficulty: Option<&'static str>,
    cuisine: Option<&'static str>,
}

struct SeedRecipe {
    title: &'static str,
    description: &'static str,
    instructions: &'static str,
    // (name, amount)
    ingredients: &'static [(&'static str, &'static str)],
    cook_time_minutes: i32,
    servings: i32,
    difficulty: &'static str,
    cuisine: &'static str,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Classic Spaghetti Carbonara",
        description: "A rich and creamy Italian pasta dish with eggs, cheese, and pancetta.",
        instructions: "1. Bring a large pot of salted water to boil and cook spaghetti until al dente.
2. While pasta cooks, cut pancetta into small cubes and fry until crispy.
3. In a bowl, whisk together eggs, grated Pecorino Romano, and black pepper.
4. When pasta is done, reserve 1 cup pasta water, then drain.
5. Working quickly, add hot pasta to the pancetta pan (off heat).
6. Pour egg mixture over pasta and toss vigorously to create a creamy sauce.
7. Add pasta water as needed to reach desired consistency.
8. Serve immediately with extra cheese and black pepper.",
        ingredients: &[
            ("spaghetti", "400 g"),
            ("pancetta", "200 g"),
            ("eggs", "4 large"),
            ("Pecorino Romano", "100 g"),
            ("black pepper", "2 tsp"),
            ("salt", "to taste"),
        ],
        cook_time_minutes: 25,
        servings: 4,
        difficulty: "Medium",
        cuisine: "Italian",
    },
    SeedRecipe {
        title: "Chicken Tikka Masala",
        description: "Tender chicken pieces in a creamy, spiced tomato sauce. A British-Indian classic.",
        instructions: "1. Marinate chicken in yogurt, garam masala, cumin, and salt for at least 2 hours.
2. Grill or broil marinated chicken until charred and cooked through.
3. In a large pan, saute onions until golden, then add garlic and ginger.
4. Add tomato puree, cream, and spices. Simmer for 15 minutes.
5. Cut grilled chicken into bite-sized pieces and add to the sauce.
6. Simmer together for 10 minutes to let flavors meld.
7. Garnish with fresh cilantro and serve with basmati rice or naan.",
        ingredients: &[
            ("chicken thighs", "800 g"),
            ("yogurt", "1 cup"),
            ("garam masala", "2 tbsp"),
            ("cumin", "1 tsp"),
            ("onion", "2 large"),
            ("garlic", "4 cloves"),
            ("ginger", "2 inches"),
            ("tomato puree", "400 g"),
            ("heavy cream", "1 cup"),
            ("cilantro", "a handful"),
        ],
        cook_time_minutes: 45,
        servings: 4,
        difficulty: "Medium",
        cuisine: "Indian",
    },
    SeedRecipe {
        title: "Beef Tacos",
        description: "Weeknight tacos with seasoned ground beef and fresh toppings.",
        instructions: "1. Brown the ground beef in a skillet over medium-high heat.
2. Add diced onion and cook until soft.
3. Stir in chili powder, cumin, paprika, and a splash of water. Simmer 5 minutes.
4. Warm the tortillas in a dry pan.
5. Fill tortillas with beef, then top with lettuce, tomato, cheese, and salsa.",
        ingredients: &[
            ("ground beef", "500 g"),
            ("onion", "1 medium"),
            ("chili powder", "1 tbsp"),
            ("cumin", "2 tsp"),
            ("corn tortillas", "8"),
            ("lettuce", "2 cups"),
            ("tomato", "2"),
            ("cheddar cheese", "1 cup"),
            ("salsa", "1/2 cup"),
        ],
        cook_time_minutes: 20,
        servings: 4,
        difficulty: "Easy",
        cuisine: "Mexican",
    },
    SeedRecipe {
        title: "Vegetable Fried Rice",
        description: "A fast way to turn leftover rice and odds-and-ends vegetables into dinner.",
        instructions: "1. Heat oil in a wok over high heat.
2. Scramble the eggs, then set aside.
3. Stir-fry carrots, peas, and scallions for 2-3 minutes.
4. Add the cold rice and break up any clumps.
5. Return the eggs, add soy sauce and sesame oil, and toss until everything is hot.",
        ingredients: &[
            ("cooked rice", "4 cups"),
            ("eggs", "3"),
            ("carrot", "1 large"),
            ("peas", "1 cup"),
            ("scallions", "4"),
            ("soy sauce", "3 tbsp"),
            ("sesame oil", "1 tsp"),
            ("vegetable oil", "2 tbsp"),
        ],
        cook_time_minutes: 15,
        servings: 4,
        difficulty: "Easy",
        cuisine: "Chinese",
    },
    SeedRecipe {
        title: "Greek Salad",
        description: "Crisp vegetables, briny olives, and feta with a simple oregano dressing.",
        instructions: "1. Cut the tomatoes and cucumber into chunks and thinly slice the red onion.
2. Combine in a bowl with olives and feta.
3. Whisk olive oil, red wine vinegar, oregano, salt, and pepper.
4. Dress the salad just before serving.",
        ingredients: &[
            ("tomatoes", "4"),
            ("cucumber", "1 large"),
            ("red onion", "1/2"),
            ("kalamata olives", "1/2 cup"),
            ("feta cheese", "200 g"),
            ("olive oil", "1/4 cup"),
            ("red wine vinegar", "2 tbsp"),
            ("dried oregano", "1 tsp"),
        ],
        cook_time_minutes: 10,
        servings: 4,
        difficulty: "Easy",
        cuisine: "Greek",
    },
    SeedRecipe {
        title: "Shrimp Scampi",
        description: "Garlicky shrimp in a lemon-butter sauce over pasta.",
        instructions: "1. Cook linguine until al dente; reserve some pasta water.
2. Melt butter with olive oil, then cook garlic until fragrant.
3. Add shrimp and cook 1-2 minutes per side.
4. Deglaze with white wine and lemon juice; simmer 2 minutes.
5. Toss with the pasta, parsley, and a splash of pasta water.",
        ingredients: &[
            ("shrimp", "500 g"),
            ("linguine", "400 g"),
            ("butter", "4 tbsp"),
            ("olive oil", "2 tbsp"),
            ("garlic", "6 cloves"),
            ("white wine", "1/2 cup"),
            ("lemon", "1"),
            ("parsley", "a handful"),
        ],
        cook_time_minutes: 25,
        servings: 4,
        difficulty: "Medium",
        cuisine: "Italian",
    },
    SeedRecipe {
        title: "Overnight Oats",
        description: "No-cook breakfast that is ready when you wake up.",
        instructions: "1. Combine oats, milk, yogurt, and chia seeds in a jar.
2. Sweeten with honey and stir well.
3. Refrigerate overnight.
4. Top with berries before serving.",
        ingredients: &[
            ("rolled oats", "1/2 cup"),
            ("milk", "1/2 cup"),
            ("yogurt", "1/4 cup"),
            ("chia seeds", "1 tbsp"),
            ("honey", "1 tbsp"),
            ("mixed berries", "1/2 cup"),
        ],
        cook_time_minutes: 5,
        servings: 1,
        difficulty: "Easy",
        cuisine: "American",
    },
    SeedRecipe {
        title: "Mushroom Risotto",
        description: "Creamy arborio rice with saut\u{e9}ed mushrooms and parmesan.",
        instructions: "1. Saute the mushrooms in butter until browned; set aside.
2. Soften the onion in olive oil, then toast the rice for 2 minutes.
3. Deglaze with white wine.
4. Add warm stock one ladle at a time, stirring until absorbed.
5. After about 18 minutes, fold in the mushrooms, parmesan, and butter.
6. Season and rest for 2 minutes before serving.",
        ingredients: &[
            ("arborio rice", "300 g"),
            ("mushrooms", "400 g"),
            ("vegetable stock", "1 liter"),
            ("onion", "1"),
            ("white wine", "1/2 cup"),
            ("parmesan", "80 g"),
            ("butter", "3 tbsp"),
        ],
        cook_time_minutes: 40,
        servings: 4,
        difficulty: "Hard",
        cuisine: "Italian",
    },
];

pub async fn seed(server: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let mut created = 0;

    for recipe in SAMPLE_RECIPES {
        let payload = RecipePayload {
            title: recipe.title,
            description: Some(recipe.description),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|(name, amount)| IngredientPayload {
                    name,
                    amount: Some(amount),
                })
                .collect(),
            instructions: recipe.instructions,
            cook_time_minutes: Some(recipe.cook_time_minutes),
            servings: Some(recipe.servings),
            difficulty: Some(recipe.difficulty),
            cuisine: Some(recipe.cuisine),
        };

        let response = client
            .post(format!("{}/api/recipes", server))
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to create '{}'", recipe.title))?;

        if response.status().is_success() {
            created += 1;
            println!("Created: {}", recipe.title);
        } else {
            println!("Failed:  {} ({})", recipe.title, response.status());
        }
    }

    println!("Seeded {}/{} recipes", created, SAMPLE_RECIPES.len());
    Ok(())
}
