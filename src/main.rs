use print_cost::config::{load_config, RuntimeConfig};
use print_cost::image::io::write_json_file;
use print_cost::image::{FileDecoder, GrayImageU8, ImageDecoder};
use print_cost::{
    CostAnalyzer, CostParams, NullRenderer, PlotRenderer, ReportRenderer, Result, TextRenderer,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let result = match std::env::args().nth(1) {
        Some(path) => run_from_config(PathBuf::from(path)),
        None => run_demo(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_from_config(path: PathBuf) -> Result<()> {
    let config = load_config(&path)?;
    let RuntimeConfig {
        input_path,
        cost,
        output,
        verbose,
    } = config;

    let analyzer = CostAnalyzer::new(cost);
    let image = FileDecoder.decode(&input_path)?;
    let report = analyzer.analyze_image(image.as_view())?;

    if verbose {
        TextRenderer.render(&image, &report)?;
    } else {
        NullRenderer.render(&image, &report)?;
    }
    if let Some(dir) = output.debug_dir {
        PlotRenderer::new(dir).render(&image, &report)?;
    }
    if let Some(json_out) = output.json_out {
        write_json_file(&json_out, &report)?;
    }
    Ok(())
}

/// Demo stub: prices a synthetic gradient page with example shop rates.
fn run_demo() -> Result<()> {
    let w = 640usize;
    let h = 480usize;
    let mut gray = vec![0u8; w * h];
    for (y, row) in gray.chunks_mut(w).enumerate() {
        let shade = (y * 255 / (h - 1)) as u8;
        row.fill(shade);
    }
    let image = GrayImageU8::new(w, h, gray);

    let analyzer = CostAnalyzer::new(CostParams {
        toner_cost: 15.0,
        toner_page_yield: 1000,
        paper_stack_cost: 5.0,
        paper_stack_sheets: 500,
        copyshop_cost: 0.035,
    });
    let report = analyzer.analyze_image(image.as_view())?;
    TextRenderer.render(&image, &report)
}
