use tera::Tera;

use crate::error::AppError;

/// Name the landing page template is registered under
pub const INDEX_TEMPLATE: &str = "index.html";

/// Initialize the Tera template engine.
///
/// Templates are compiled into the binary so the server has no runtime
/// dependency on its working directory.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}
