//! HTTP span helpers.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = route_template(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Collapse identifier segments so every influencer shares one route label.
fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/".to_owned(),
        ["influencers", _id] => "/influencers/{id}".to_owned(),
        _ => segments
            .iter()
            .map(|&segment| {
                if Uuid::parse_str(segment).is_ok() {
                    "{uuid}"
                } else {
                    segment
                }
            })
            .fold(String::new(), |mut template, segment| {
                template.push('/');
                template.push_str(segment);
                template
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn influencer_ids_share_a_route() {
        let names = request_span_name("DELETE", "/influencers/not-a-uuid");

        assert_eq!(names.otel_path, "/influencers/{id}");
        assert_eq!(names.otel_span_name, "DELETE /influencers/{id}");
    }

    #[test]
    fn root_and_collection_paths_are_kept() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template("/influencers"), "/influencers");
        assert_eq!(route_template("/healthcheck/"), "/healthcheck");
    }
}
