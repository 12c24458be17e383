use lambda_http::Response;

pub type HttpLambdaResponse = Result<Response<String>, Response<String>>;

// This macro is intended for lambdas that directly serve HTTP requests. It is
// used to reduce boilerplate, to preserve state between executions and to
// take advantage of the `?` operator: an error can be returned as a HTTP
// response from any point of the handler.
//
// This macro supports request validation as a third parameter. Validation
// functions run before the business logic with the signature
// `Fn(&Request) -> Result<(), Response<String>>`.
//
// Example usage:
// ```
// http_lambda_main!(
// { .. State },
// main_fn,
// [
//   validation_1,
//   validation_2
// ]
// )
// ```
#[macro_export]
macro_rules! http_lambda_main {
    ($persisted_block:block, $handler: ident) => {
        $crate::http_lambda_main!($persisted_block, $handler, []);
    };
    ($persisted_block:block, $handler: ident, [$($validation:ident),*]) => {
        #[tokio::main]
        async fn main() -> Result<(), Error> {
            use lambda_http::{Request, Response};
            use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
            use tracing_log::LogTracer;
            use tracing_subscriber::{filter::LevelFilter, prelude::*};

            LogTracer::init()?;

            let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
            let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
            let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking_writer);

            tracing_subscriber::registry()
                .with(LevelFilter::INFO)
                .with(JsonStorageLayer)
                .with(bunyan_formatting_layer)
                .init();

            let persisted = { $persisted_block };

            let service = |request: Request| async {
                tracing::info!(
                    method = %request.method(),
                    path = %request.uri().path(),
                    "Execution started"
                );

                $(
                if let Err(response) = $validation(&request) {
                    return Ok(response);
                }
                )*

                let response: Result<Response<String>, Error> =
                    match $handler(request, &persisted).await {
                        Ok(response) => Ok(response),
                        Err(response) => Ok(response),
                    };

                response
            };

            run(service_fn(service)).await
        }
    };
}
