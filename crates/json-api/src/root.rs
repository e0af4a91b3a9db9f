//! Root redirect

use salvo::prelude::*;

/// Send `/` to the unfiltered influencer list.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Redirect::found("/influencers"));
}
