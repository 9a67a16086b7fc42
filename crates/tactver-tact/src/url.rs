//! URL construction for the version endpoint.

use crate::models::Product;
use url::Url;

/// Build the `/{product}/versions` URL under `base`.
///
/// Any path already on `base` is kept, so `http://host/prefix` yields
/// `http://host/prefix/{product}/versions`.
pub fn build_versions_url(base: &Url, product: &Product) -> Url {
    let mut url = base.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{}/versions", product.as_str()));
    url.set_query(None);

    url
}
