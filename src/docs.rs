use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::assistant::model::{AskRequest, AskResponse};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, RegisterRequestDto, SuccessResponse,
};
use crate::modules::blogs::model::Blog;
use crate::modules::categories::model::Category;
use crate::modules::courses::model::{CourseDto, SpecializedCourse};
use crate::modules::lessons::model::{LessonStatus, LessonWithRelations};
use crate::modules::messages::model::{ContactDto, ContactMessage};
use crate::modules::progress::model::{ProgressWithLesson, UpdateProgressDto};
use crate::modules::users::model::{AdminStats, CreateUserDto, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::categories::controller::get_categories,
        crate::modules::lessons::controller::get_lessons,
        crate::modules::lessons::controller::get_lesson_by_slug,
        crate::modules::lessons::controller::get_lessons_for_staff,
        crate::modules::lessons::controller::create_lesson,
        crate::modules::lessons::controller::update_lesson,
        crate::modules::lessons::controller::delete_lesson,
        crate::modules::blogs::controller::get_blogs,
        crate::modules::blogs::controller::create_blog,
        crate::modules::blogs::controller::update_blog,
        crate::modules::blogs::controller::delete_blog,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::messages::controller::create_message,
        crate::modules::messages::controller::get_messages,
        crate::modules::messages::controller::mark_message_read,
        crate::modules::progress::controller::get_progress,
        crate::modules::progress::controller::update_progress,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::delete_user,
        crate::modules::users::controller::get_stats,
        crate::modules::assistant::controller::ask_assistant,
    ),
    components(
        schemas(
            User,
            UserRole,
            CreateUserDto,
            AdminStats,
            LoginRequest,
            LoginResponse,
            RegisterRequestDto,
            SuccessResponse,
            ErrorResponse,
            Category,
            LessonStatus,
            LessonWithRelations,
            Blog,
            SpecializedCourse,
            CourseDto,
            ContactMessage,
            ContactDto,
            ProgressWithLesson,
            UpdateProgressDto,
            AskRequest,
            AskResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Categories", description = "Lesson categories"),
        (name = "Lessons", description = "Public lesson catalog and staff lesson management"),
        (name = "Blogs", description = "Blog posts"),
        (name = "Courses", description = "Specialized courses"),
        (name = "Messages", description = "Contact form and admin inbox"),
        (name = "Progress", description = "Student lesson progress"),
        (name = "Users", description = "Admin user management"),
        (name = "Assistant", description = "AI learning assistant")
    ),
    info(
        title = "MY Quran Guide API",
        version = "0.1.0",
        description = "REST API for a Quran academy: lessons, blogs, specialized courses, student progress tracking and an AI learning assistant.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

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
                        .build(),
                ),
            )
        }
    }
}
