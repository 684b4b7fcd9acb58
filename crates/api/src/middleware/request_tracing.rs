use tower_http::trace::TraceLayer;

/// Request/response logging layer. Spans carry method and path; bodies
/// (uploads included) are never logged.
pub fn trace_layer(
) -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
}
