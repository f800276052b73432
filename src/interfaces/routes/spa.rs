use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::{
    dev::{fn_service, ServiceRequest, ServiceResponse},
    web,
};

use crate::constants::SPA_INDEX_FILE;

/// Serves the front-end build from `static_dir`. Paths with no matching
/// file get `index.html` so client-side routing can take over.
pub fn serve_from(static_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let index = static_dir.join(SPA_INDEX_FILE);

        cfg.service(
            Files::new("/", static_dir)
                .index_file(SPA_INDEX_FILE)
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                }))
        );
    }
}
