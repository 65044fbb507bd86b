//! # scaffold-names
//!
//! A CLI tool and library that derives the conventional names a code
//! scaffolding command needs from a single identifier, and renders stub
//! templates with them.
//!
//! Given `Admin/PostController` and a controller configured with the
//! `Controller` postfix, it derives:
//! - **Namespaces and paths**: `Admin/`, `App\Http\Controllers\Admin`.
//! - **Resource names**: `post` (resource), `posts` (collection).
//! - **Type names**: `Post` (model), `PostController` (file/class).
//! - **Storage names**: `posts` (table), `admin.posts` (view path).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scaffold_names::config::Config;
//! use scaffold_names::models::GeneratorOptions;
//! use scaffold_names::pipeline::Pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default_config();
//!     let pipeline = Pipeline::new(&config);
//!     pipeline.run(&GeneratorOptions::new("model"), "Admin/Posts")?;
//!     Ok(())
//! }
//! ```
//!
//! The resolver can also be used on its own:
//!
//! ```rust
//! use scaffold_names::models::Settings;
//! use scaffold_names::resolver::NameResolver;
//!
//! let names = NameResolver::new("App/Models/BlogPost", Settings::default()).resolve();
//! assert_eq!(names.table_name, "blog_posts");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod inflector;
pub mod models;
pub mod pipeline;
pub mod resolver;
pub mod stubs;
