use anyhow::Result;
use log::LevelFilter;
use redeem_linalg::{FormatConfig, Matrix, Vector};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("REDEEM_LOG", "error,redeem_linalg=debug"))
        .init();

    let mut v = Vector::parse("[ 1.0 2.0 3.0 ]")?;
    let w: Vector = "[ 4.0 5.0 6.0 ]".parse()?;
    println!("v = {}", v);
    println!("w = {}", w);
    println!("v + 5 = {}", v.scalar_add(5.0));
    println!("v .* w = {}", v.elementwise_mult(&w)?);
    println!("<v, w> = {}", Vector::inner_product(&v, &w)?);

    v.resize(4)?;
    println!("v resized to 4 = {}", v);

    // Rows of a 2x3 matrix, then its transpose and product with v's prefix
    let m = Matrix::from_rows(&[Vector::parse("[ 1 2 3 ]")?, Vector::parse("[ 4 5 6 ]")?])?;
    println!("m =\n{}", m);
    println!("m^T =\n{}", m.transpose());
    println!("m * m^T =\n{}", Matrix::multiply(&m, &m.transpose())?);

    v.resize(3)?;
    println!("m * v = {}", Matrix::multiply_vector(&m, &v)?);
    println!("I(3) =\n{}", Matrix::identity(3)?.render(&FormatConfig::new(4, 1)));

    if let Err(e) = Matrix::multiply(&m, &m) {
        println!("expected failure: {}", e);
    }

    Ok(())
}
