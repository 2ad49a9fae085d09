use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::errors::ErrorResponse;
use crate::models::{
    CategoriesResponse, CategoryQuestionsResponse, CategoryResponse, CreateDrinkRequest,
    CreateQuestionRequest, DrinkDeletedResponse, DrinkResponse, DrinksResponse, HealthResponse,
    QuestionCreatedResponse, QuestionDeletedResponse, QuestionPageResponse, QuestionResponse,
    QuizCategory, QuizRequest, QuizResponse, RecipeInput, RecipePart, RecipePartResponse,
    SearchQuestionsRequest, SearchQuestionsResponse, UpdateDrinkRequest,
};

/// OpenAPI documentation for the Trivia and Coffee Shop API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia & Coffee Shop API",
        version = "1.0.0",
        description = "Paged trivia questions with search and quizzes, plus a drink catalog guarded by permission scopes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Categories", description = "Trivia categories and their questions"),
        (name = "Questions", description = "Question listing, creation, deletion and search"),
        (name = "Quizzes", description = "Random quiz questions"),
        (name = "Drinks", description = "Coffee shop drink catalog")
    ),
    paths(
        crate::handlers::health_check,
        crate::handlers::get_categories,
        crate::handlers::get_category_questions,
        crate::handlers::get_questions,
        crate::handlers::create_question,
        crate::handlers::delete_question,
        crate::handlers::search_questions,
        crate::handlers::play_quiz,
        crate::handlers::get_drinks,
        crate::handlers::get_drinks_detail,
        crate::handlers::create_drink,
        crate::handlers::update_drink,
        crate::handlers::delete_drink
    ),
    components(
        schemas(
            CreateQuestionRequest,
            SearchQuestionsRequest,
            QuizCategory,
            QuizRequest,
            CreateDrinkRequest,
            UpdateDrinkRequest,
            RecipeInput,
            RecipePart,
            QuestionResponse,
            CategoryResponse,
            CategoriesResponse,
            QuestionPageResponse,
            CategoryQuestionsResponse,
            SearchQuestionsResponse,
            QuestionCreatedResponse,
            QuestionDeletedResponse,
            QuizResponse,
            RecipePartResponse,
            DrinkResponse,
            DrinksResponse,
            DrinkDeletedResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "HS256 token whose `permissions` claim lists drink scopes",
                        ))
                        .build(),
                ),
            );
        }
    }
}
