use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exr2tiff::image_pipeline::{ConversionConfig, ExrToTiffPipeline, TiffCompression};
use std::io::Cursor;

fn generate_rgb_exr(width: usize, height: usize) -> Vec<u8> {
    use exr::prelude::*;
    use smallvec::smallvec;

    let gradient = |phase: usize| -> FlatSamples {
        let values = (0..width * height)
            .map(|i| ((i + phase) % 256) as f32 / 255.0)
            .collect();
        FlatSamples::F32(values)
    };

    let layer = Layer::new(
        (width, height),
        LayerAttributes::default(),
        Encoding::SMALL_LOSSLESS,
        AnyChannels::sort(smallvec![
            AnyChannel::new("R", gradient(0)),
            AnyChannel::new("G", gradient(85)),
            AnyChannel::new("B", gradient(170)),
        ]),
    );

    let mut bytes = Cursor::new(Vec::new());
    Image::from_layer(layer).write().to_buffered(&mut bytes).unwrap();
    bytes.into_inner()
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let exr_data = generate_rgb_exr(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &exr_data,
            |b, data| {
                let config = ConversionConfig::default();
                let pipeline = ExrToTiffPipeline::new(config);

                b.iter(|| {
                    let mut output = Cursor::new(Vec::new());
                    let _ = pipeline.convert(black_box(data), &mut output);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_compression_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_compression");
    let exr_data = generate_rgb_exr(500, 500);

    let methods = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::DeflateFast, "deflate_fast"),
    ];

    for (compression, label) in methods {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &exr_data,
            |b, data| {
                let config = ConversionConfig::builder().compression(compression).build();
                let pipeline = ExrToTiffPipeline::new(config);

                b.iter(|| {
                    let mut output = Cursor::new(Vec::new());
                    let _ = pipeline.convert(black_box(data), &mut output);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_compression_methods
);
criterion_main!(benches);
