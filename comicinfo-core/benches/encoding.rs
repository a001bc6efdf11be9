//! Encoding benchmarks

use comicinfo_core::{
    ComicInfo, ComicInfoV2, CommunityRating, PageType, PageV2, LANGUAGE_ENGLISH,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn long_issue(pages: u32) -> ComicInfoV2 {
    let mut doc = ComicInfoV2::new("Bone: The Complete Cartoon Epic");
    doc.base.series = "Bone".to_string();
    doc.base.writer = "Jeff Smith".to_string();
    doc.base.web = "https://example.com/bone https://example.org/bone".to_string();
    doc.base.language_iso = LANGUAGE_ENGLISH.to_string();
    doc.base.page_count = pages as i32;
    doc.extended.community_rating = Some(CommunityRating::new(4.5));
    for image in 0..pages {
        let page_type = if image == 0 {
            PageType::FrontCover
        } else {
            PageType::Story
        };
        doc.extended.pages.push(
            PageV2::new(image, format!("page-{image:04}.jpg"))
                .with_type(page_type)
                .with_size(350_000)
                .with_dimensions(1988, 3056),
        );
    }
    doc
}

fn encoding_benchmark(c: &mut Criterion) {
    let doc = long_issue(200);

    c.bench_function("validate_v2_200_pages", |b| {
        b.iter(|| std::hint::black_box(&doc).validate())
    });

    c.bench_function("encode_v2_200_pages", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(64 * 1024);
            std::hint::black_box(&doc).encode(&mut output).map(|_| output.len())
        })
    });
}

criterion_group!(benches, encoding_benchmark);
criterion_main!(benches);
