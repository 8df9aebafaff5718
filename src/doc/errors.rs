/*!
# Error Messages

Every error ends the program. The message names the source line,
counted from the top of the file starting at 1.

| Message | Cause |
|---|---|
| `SYNTAX ERROR` | A statement is malformed, or a number can't be read. |
| `UNBALANCED PARENTHESES` | A `(` has no matching `)`. |
| `NO EXPRESSION PRESENT` | A value was needed but the line ended. |
| `DIVISION BY ZERO` | The right side of `/` or `%` was zero. |
| `EQUAL SIGN EXPECTED` | An assignment or `FOR` is missing its `=`. |
| `NOT A VARIABLE` | A variable name was expected. |
| `DUPLICATE LABEL` | Two lines start with the same label. |
| `UNDEFINED LABEL` | `GOTO` or `GOSUB` named a label that doesn't exist. |
| `THEN EXPECTED` | A true `IF` is not followed by `THEN`. |
| `TO EXPECTED` | `FOR` is missing `TO`. |
| `NEXT WITHOUT FOR` | `NEXT` or `UNTIL` with no loop open. |
| `RETURN WITHOUT GOSUB` | `RETURN` with no `GOSUB` pending. |
| `MISSING CLOSING QUOTE` | A string runs to the end of its line. |
| `FILE NOT FOUND` | The program file doesn't exist. |
| `FILE I/O ERROR` | The program file couldn't be read. |
| `INPUT I/O ERROR` | `INPUT` reached the end of the terminal input. |
| `OUT OF MEMORY` | Too many nested loops or `GOSUB` calls. |

`INPUT` that can't be read as a number prints `INVALID INPUT`
and carries on without changing the variable.
*/
