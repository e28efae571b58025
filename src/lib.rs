// Library root
// -----------
// The binary (`main.rs`) parses the command line and hands off to these
// modules, which implement the `new` post flow.
//
// Module responsibilities:
// - `config`: resolves the posts and static assets directories under the
//   user's home directory, once, at startup.
// - `api`: downloads the stock image over HTTP.
// - `post`: slug, date and front matter rendering, plus writing the
//   markdown file.
// - `ui`: the interactive prompts and the progress output around the flow.
pub mod api;
pub mod config;
pub mod post;
pub mod ui;
