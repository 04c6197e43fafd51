// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use statcard::{
    AggregateOptions, Category, FontWeight, RenderOptions, Theme, aggregate_results, measure,
    parse_config, parse_query_results, render,
};

const PAGES: &str = include_str!("../tests/fixtures/query_results.json");
const MULTIPAGE: &str = include_str!("../tests/fixtures/query_results_multipage.json");

fn benchmark_aggregate(c: &mut Criterion,)
{
    let results = parse_query_results(PAGES,).expect("fixture parses",);
    let options = AggregateOptions::default();

    c.bench_function("aggregate_single_page", |b| {
        b.iter(|| aggregate_results(black_box(&results,), black_box(&options,),),)
    },);
}

fn benchmark_aggregate_multipage(c: &mut Criterion,)
{
    let results = parse_query_results(MULTIPAGE,).expect("fixture parses",);
    let options = AggregateOptions {
        auto_languages: true,
        ..AggregateOptions::default()
    };

    c.bench_function("aggregate_multipage_auto_languages", |b| {
        b.iter(|| aggregate_results(black_box(&results,), black_box(&options,),),)
    },);
}

fn benchmark_measure(c: &mut Criterion,)
{
    let labels = ["Pull Request Reviews", "Private Contributions", "Mona Octocat's GitHub Activity",];

    c.bench_function("measure_labels", |b| {
        b.iter(|| {
            labels
                .iter()
                .map(|label| measure(black_box(label,), 14.0, FontWeight::Regular,),)
                .sum::<f64>()
        },)
    },);

    let long = "abcdefghijklmnopqrstuvwxyz0123456789".repeat(64,);
    c.bench_function("measure_long_bold", |b| {
        b.iter(|| measure(black_box(&long,), 18.0, FontWeight::Bold,),)
    },);
}

fn benchmark_render(c: &mut Criterion,)
{
    let results = parse_query_results(PAGES,).expect("fixture parses",);
    let model = aggregate_results(&results, &AggregateOptions::default(),);
    let theme = Theme::builtin("dark",).expect("builtin theme",);
    let options = RenderOptions::default();

    c.bench_function("render_default_card", |b| {
        b.iter(|| {
            render(black_box(&model,), &theme, "en", &Category::ALL, &options,).expect("render failed",)
        },)
    },);

    let settings =
        parse_config("theme: halloween\ncard:\n  columns: 2\n  animate_languages: true\n",).expect("valid settings",);
    c.bench_function("render_two_column_card", |b| {
        b.iter(|| {
            render(
                black_box(&model,),
                &settings.theme,
                settings.locale,
                &settings.categories,
                &settings.render,
            )
            .expect("render failed",)
        },)
    },);
}

criterion_group!(
    benches,
    benchmark_aggregate,
    benchmark_aggregate_multipage,
    benchmark_measure,
    benchmark_render
);
criterion_main!(benches);
