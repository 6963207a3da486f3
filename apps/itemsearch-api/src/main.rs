use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = itemsearch_api::Args::parse();
	itemsearch_api::run(args).await
}
