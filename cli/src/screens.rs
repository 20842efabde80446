//! Interactive terminal screens.
//!
//! A thin adapter: user input becomes controller method calls, controller
//! state becomes rendered text. No business logic lives here; validation,
//! busy tracking, and the delete-confirmation state all belong to the
//! controllers in `compras-core`. Screens are parameterized over
//! `BufRead`/`Write` so they can be driven from tests.

use std::io::{self, BufRead, Write};

use compras_core::{
    FormController, Item, ListController, ListaClient, Navigator, Route,
};

use crate::transport::Execute;

/// A parsed list-screen command.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    New,
    Edit(usize),
    Delete(usize),
    Refresh,
    Back,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = match (parts.next()?, parts.next()) {
        ("n", None) => Command::New,
        ("r", None) => Command::Refresh,
        ("b", None) => Command::Back,
        ("e", Some(n)) => Command::Edit(n.parse().ok()?),
        ("d", Some(n)) => Command::Delete(n.parse().ok()?),
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

/// Read one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for one form field. Blank input keeps the current value.
fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> io::Result<Option<String>> {
    if current.is_empty() {
        write!(output, "{label}: ")?;
    } else {
        write!(output, "{label} [{current}]: ")?;
    }
    output.flush()?;
    match read_line(input)? {
        None => Ok(None),
        Some(line) if line.is_empty() => Ok(Some(current.to_string())),
        Some(line) => Ok(Some(line)),
    }
}

/// Drive the screen loop until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    client: &ListaClient,
    transport: &impl Execute,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let mut nav = Navigator::new();
    loop {
        let keep_going = match nav.current().clone() {
            Route::Home => home_screen(&mut nav, input, output)?,
            Route::Register { editing } => {
                register_screen(client, transport, &mut nav, editing, input, output)?
            }
            Route::Items => items_screen(client, transport, &mut nav, input, output)?,
        };
        if !keep_going {
            writeln!(output, "Até logo.")?;
            return Ok(());
        }
    }
}

fn home_screen<R: BufRead, W: Write>(
    nav: &mut Navigator,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    writeln!(output)?;
    writeln!(output, "== Lista de Compras ==")?;
    writeln!(output, "[1] Cadastrar item")?;
    writeln!(output, "[2] Consultar itens")?;
    writeln!(output, "[q] Sair")?;
    write!(output, "> ")?;
    output.flush()?;

    let Some(choice) = read_line(input)? else {
        return Ok(false);
    };
    match choice.as_str() {
        "1" => nav.navigate(Route::Register { editing: None }),
        "2" => nav.navigate(Route::Items),
        "q" => return Ok(false),
        other => writeln!(output, "Opção inválida: {other}")?,
    }
    Ok(true)
}

fn register_screen<R: BufRead, W: Write>(
    client: &ListaClient,
    transport: &impl Execute,
    nav: &mut Navigator,
    editing: Option<Item>,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let mut form = match editing {
        Some(item) => {
            writeln!(output, "\n== Editar item {} ==", item.id)?;
            FormController::editing(item)
        }
        None => {
            writeln!(output, "\n== Cadastrar item ==")?;
            FormController::new()
        }
    };

    loop {
        let Some(title) = prompt_field(input, output, "Produto", form.title())? else {
            return Ok(false);
        };
        form.set_title(title);
        let Some(quantity) = prompt_field(input, output, "Quantidade", form.quantity())? else {
            return Ok(false);
        };
        form.set_quantity(quantity);
        let Some(price) = prompt_field(input, output, "Preço", form.price())? else {
            return Ok(false);
        };
        form.set_price(price);

        // Local validation failure: no request was built, fields are
        // retained, prompt again.
        let request = match form.submit(client) {
            Ok(request) => request,
            Err(err) => {
                writeln!(output, "Erro: {err}")?;
                continue;
            }
        };

        match form.complete_submit(client, transport.execute(request)) {
            Ok(item) => {
                writeln!(output, "Item salvo (id {}).", item.id)?;
                nav.go_back();
                if *nav.current() != Route::Items {
                    nav.navigate(Route::Items);
                }
                return Ok(true);
            }
            Err(err) => {
                writeln!(output, "Erro ao salvar: {err}")?;
                write!(output, "Tentar novamente? (s/N) ")?;
                output.flush()?;
                match read_line(input)? {
                    Some(answer) if answer.eq_ignore_ascii_case("s") => continue,
                    Some(_) => {
                        nav.go_back();
                        return Ok(true);
                    }
                    None => return Ok(false),
                }
            }
        }
    }
}

fn items_screen<R: BufRead, W: Write>(
    client: &ListaClient,
    transport: &impl Execute,
    nav: &mut Navigator,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let mut list = ListController::new();
    writeln!(output, "\n== Itens cadastrados ==")?;
    // The list is rebuilt from the server every time the screen gains
    // focus; it is not a cache.
    refresh(client, transport, &mut list, output)?;

    loop {
        render(&list, output)?;
        writeln!(output, "[n] novo  [e N] editar  [d N] excluir  [r] atualizar  [b] voltar")?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match parse_command(&line) {
            Some(Command::Back) => {
                nav.go_back();
                return Ok(true);
            }
            Some(Command::New) => {
                nav.navigate(Route::Register { editing: None });
                return Ok(true);
            }
            Some(Command::Refresh) => refresh(client, transport, &mut list, output)?,
            Some(Command::Edit(n)) => match select(&list, n) {
                Some(item) => {
                    nav.navigate(Route::Register { editing: Some(item) });
                    return Ok(true);
                }
                None => writeln!(output, "Item {n} não existe.")?,
            },
            Some(Command::Delete(n)) => match select(&list, n) {
                Some(item) => {
                    if !delete_flow(client, transport, &mut list, &item, input, output)? {
                        return Ok(false);
                    }
                }
                None => writeln!(output, "Item {n} não existe.")?,
            },
            None => writeln!(output, "Comando inválido: {line}")?,
        }
    }
}

fn select(list: &ListController, n: usize) -> Option<Item> {
    n.checked_sub(1).and_then(|i| list.items().get(i)).cloned()
}

fn refresh<W: Write>(
    client: &ListaClient,
    transport: &impl Execute,
    list: &mut ListController,
    output: &mut W,
) -> io::Result<()> {
    match list.begin_refresh(client) {
        Ok(request) => {
            writeln!(output, "Carregando...")?;
            if let Err(err) = list.complete_refresh(client, transport.execute(request)) {
                writeln!(output, "Falha ao buscar lista: {err}")?;
            }
        }
        Err(err) => writeln!(output, "Erro: {err}")?,
    }
    Ok(())
}

fn render<W: Write>(list: &ListController, output: &mut W) -> io::Result<()> {
    if list.items().is_empty() {
        writeln!(output, "Nenhum item cadastrado ainda.")?;
        return Ok(());
    }
    for (index, item) in list.items().iter().enumerate() {
        writeln!(
            output,
            "{}. {}  (quantidade: {}, preço: {})",
            index + 1,
            item.title,
            item.quantity_display(),
            item.price_display()
        )?;
    }
    Ok(())
}

fn delete_flow<R: BufRead, W: Write>(
    client: &ListaClient,
    transport: &impl Execute,
    list: &mut ListController,
    item: &Item,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let title = match list.request_delete(item) {
        Ok(target) => target.title.clone(),
        Err(err) => {
            writeln!(output, "Erro: {err}")?;
            return Ok(true);
        }
    };

    write!(output, "Excluir \"{title}\"? (s/N) ")?;
    output.flush()?;
    let Some(answer) = read_line(input)? else {
        return Ok(false);
    };
    if !answer.eq_ignore_ascii_case("s") {
        list.cancel_delete();
        writeln!(output, "Exclusão cancelada.")?;
        return Ok(true);
    }

    match list.confirm_delete(client) {
        Ok(request) => match list.complete_delete(client, transport.execute(request)) {
            Ok(removed) => writeln!(output, "Item \"{}\" excluído.", removed.title)?,
            Err(err) => writeln!(output, "Erro na exclusão: {err}")?,
        },
        Err(err) => writeln!(output, "Erro: {err}")?,
    }
    Ok(true)
}
