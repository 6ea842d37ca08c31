use chumsky::prelude::*;

use crate::error::CircuitError;
use crate::Point;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = any()
        .filter(|c: &char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map(|s: &str, span| match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_) => Err(Rich::custom(span, format!("coordinate `{s}` is not finite"))),
            Err(e) => Err(Rich::custom(span, format!("invalid coordinate `{s}`: {e}"))),
        })
        .padded_by(text::inline_whitespace());

    let point = coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| Point::new(x, y, z));

    point
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .then_ignore(text::whitespace())
}

/// Reads one junction box per line. A single malformed record fails the whole
/// read so point indices never drift.
pub fn parse_junctions(input: &str) -> Result<Vec<Point>, CircuitError> {
    parser().parse(input).into_result().map_err(|errors| {
        let (span, reason) = errors
            .first()
            .map(|e| (e.span().start..e.span().end, e.reason().to_string()))
            .unwrap_or((0..0, String::from("unexpected input")));
        CircuitError::Parse {
            src: input.to_string(),
            span: (span.start, span.end - span.start).into(),
            reason,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> miette::Result<()> {
        let points = parse_junctions("162,817,812\n57,618,57\n906,360,560\n")?;
        assert_eq!(
            points,
            vec![
                Point::new(162.0, 817.0, 812.0),
                Point::new(57.0, 618.0, 57.0),
                Point::new(906.0, 360.0, 560.0),
            ]
        );
        Ok(())
    }

    #[rstest]
    #[case("", 0)]
    #[case("1,2,3", 1)]
    #[case("1,2,3\r\n4,5,6\r\n", 2)]
    #[case("-1.5, 2 ,0.25\n\n", 1)]
    #[case("0,0,0\n0,0,0", 2)]
    fn accepts(#[case] input: &str, #[case] expected: usize) -> miette::Result<()> {
        assert_eq!(parse_junctions(input)?.len(), expected);
        Ok(())
    }

    #[test]
    fn keeps_fractions_and_signs() -> miette::Result<()> {
        let points = parse_junctions("-1.5,2.25,-0.5")?;
        assert_eq!(points, vec![Point::new(-1.5, 2.25, -0.5)]);
        Ok(())
    }

    #[rstest]
    #[case("007,1,2", Point::new(7.0, 1.0, 2.0))]
    #[case("1e3,+1,.5", Point::new(1000.0, 1.0, 0.5))]
    #[case("5.,-2E-1,0", Point::new(5.0, -0.2, 0.0))]
    fn accepts_scanf_style_numbers(#[case] input: &str, #[case] expected: Point) -> miette::Result<()> {
        assert_eq!(parse_junctions(input)?, vec![expected]);
        Ok(())
    }

    #[rstest]
    #[case("1,2")]
    #[case("1,2,3\nfoo,5,6")]
    #[case("1,2,3,4")]
    #[case("1;2;3")]
    #[case("1,2,--3")]
    #[case("1,2,1e999")]
    #[case("1,.,3")]
    fn rejects_malformed_records(#[case] input: &str) {
        let err = parse_junctions(input).unwrap_err();
        assert!(matches!(err, CircuitError::Parse { .. }));
    }
}
