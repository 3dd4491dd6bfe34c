//! PeçaAq storefront shell.
//!
//! A line-oriented driver over [`Storefront`]: each command becomes an
//! [`InputEvent`], and a [`TextRenderer`] draws what a real frontend would
//! receive. `busca` goes through the same debounce as keystrokes on the
//! page, so the shell sleeps until the deadline before polling.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use pecaaq_core::{seed, SortMode};
use pecaaq_storefront::{InputEvent, ProductPage, Storefront, TextRenderer};

const HELP: &str = "\
comandos:
  busca <texto>         pesquisa (com debounce, como na página)
  ordem <modo>          price-asc | price-desc | recent | relevance | default
  marca <nome>          marca/desmarca uma marca
  categoria <nome>      marca/desmarca uma categoria
  preco <min> <max>     faixa de preço (use - para sem limite)
  oportunidades         alterna o filtro de oportunidades
  proxima | anterior    navegação de página
  mais-marcas           mostrar mais / menos marcas
  comprar <id>          adiciona ao carrinho
  filtros               mostra marcas e categorias
  json                  página atual como JSON (o que o frontend recebe)
  limpar                limpa todos os filtros
  sair";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = match seed::sample_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("erro ao carregar o catálogo: {err}");
            std::process::exit(1);
        }
    };
    info!(products = catalog.len(), "catálogo carregado");

    let mut store = Storefront::new(catalog);
    let mut renderer = TextRenderer::new();
    store.render_initial(&mut renderer);
    println!("{HELP}");

    // The shell mirrors the page's checkbox state: events carry the full
    // selected set, not deltas.
    let mut brands: BTreeSet<String> = BTreeSet::new();
    let mut categories: BTreeSet<String> = BTreeSet::new();
    let mut opportunity = false;

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        let event = match command {
            "" => continue,
            "sair" | "quit" => break,
            "ajuda" | "help" => {
                println!("{HELP}");
                continue;
            }

            "busca" => {
                dispatch(
                    &mut store,
                    InputEvent::QueryChanged(rest.to_string()),
                    &mut renderer,
                );
                // Wait out the debounce window, exactly like the page does
                if let Some(deadline) = store.search_deadline() {
                    let now = Instant::now();
                    if deadline > now {
                        std::thread::sleep(deadline - now);
                    }
                    store.poll_search(Instant::now(), &mut renderer);
                }
                continue;
            }

            "ordem" => match rest.parse::<SortMode>() {
                Ok(mode) => InputEvent::SortChanged(mode),
                Err(()) => {
                    println!("ordem desconhecida: {rest}");
                    continue;
                }
            },

            "marca" => {
                if !brands.remove(rest) {
                    brands.insert(rest.to_string());
                }
                InputEvent::BrandsChanged(brands.clone())
            }

            "categoria" => {
                if !categories.remove(rest) {
                    categories.insert(rest.to_string());
                }
                InputEvent::CategoriesChanged(categories.clone())
            }

            "preco" => {
                let mut bounds = rest.split_whitespace();
                let min = bounds.next().unwrap_or("-");
                let max = bounds.next().unwrap_or("-");
                let unbounded = |s: &str| if s == "-" { String::new() } else { s.to_string() };
                InputEvent::PriceRangeApplied {
                    min: unbounded(min),
                    max: unbounded(max),
                }
            }

            "oportunidades" => {
                opportunity = !opportunity;
                InputEvent::OpportunityToggled(opportunity)
            }

            "proxima" => InputEvent::NextPage,
            "anterior" => InputEvent::PrevPage,
            "mais-marcas" => InputEvent::ToggleBrandList,

            "comprar" => match rest.parse::<u32>() {
                Ok(product_id) => InputEvent::AddToCart { product_id },
                Err(_) => {
                    println!("id inválido: {rest}");
                    continue;
                }
            },

            "filtros" => {
                store.render_initial(&mut renderer);
                continue;
            }

            "json" => {
                let page = ProductPage::from(&store.page_view());
                match serde_json::to_string_pretty(&page) {
                    Ok(json) => println!("{json}"),
                    Err(err) => println!("erro ao serializar: {err}"),
                }
                continue;
            }

            "limpar" => {
                brands.clear();
                categories.clear();
                opportunity = false;
                dispatch(
                    &mut store,
                    InputEvent::BrandsChanged(BTreeSet::new()),
                    &mut renderer,
                );
                dispatch(
                    &mut store,
                    InputEvent::CategoriesChanged(BTreeSet::new()),
                    &mut renderer,
                );
                dispatch(
                    &mut store,
                    InputEvent::OpportunityToggled(false),
                    &mut renderer,
                );
                dispatch(
                    &mut store,
                    InputEvent::PriceRangeApplied {
                        min: String::new(),
                        max: String::new(),
                    },
                    &mut renderer,
                );
                dispatch(
                    &mut store,
                    InputEvent::QueryChanged(String::new()),
                    &mut renderer,
                );
                if let Some(deadline) = store.search_deadline() {
                    let now = Instant::now();
                    if deadline > now {
                        std::thread::sleep(deadline - now);
                    }
                    store.poll_search(Instant::now(), &mut renderer);
                }
                continue;
            }

            _ => {
                println!("comando desconhecido: {command} (ajuda para a lista)");
                continue;
            }
        };

        dispatch(&mut store, event, &mut renderer);
    }
}

fn dispatch(store: &mut Storefront, event: InputEvent, renderer: &mut TextRenderer) {
    if let Err(err) = store.handle(event, Instant::now(), renderer) {
        println!("erro: {err}");
    }
}
